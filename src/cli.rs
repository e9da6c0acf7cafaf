use crate::config::Config;
use crate::creation::{ErrorReporter, NamePrompt, Navigator};
use crate::error::{CollectionError, Result};
use crate::list_view::CollectionListView;
use crate::paginator::PageSource;
use indicatif::ProgressBar;
use inquire::{InquireError, Text};
use std::future::Future;
use std::time::Duration;

/// Esc and Ctrl-C both dismiss a prompt instead of ending the program.
pub fn dismiss_on_interrupt<T>(
    answer: std::result::Result<Option<T>, InquireError>,
) -> std::result::Result<Option<T>, InquireError> {
    match answer {
        Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => Ok(None),
        other => other,
    }
}

pub struct InquirePrompt;

impl NamePrompt for InquirePrompt {
    async fn ask(&mut self, message: &str, error: Option<&str>) -> Result<Option<String>> {
        let mut text = Text::new(message);
        if let Some(error) = error {
            text = text.with_help_message(error);
        }
        Ok(dismiss_on_interrupt(text.prompt_skippable())?)
    }
}

pub struct SiteNavigator {
    config: Config,
}

impl SiteNavigator {
    pub fn new(config: &Config) -> Self {
        SiteNavigator {
            config: config.clone(),
        }
    }
}

impl Navigator for SiteNavigator {
    fn navigate_to(&mut self, path: &str) {
        let url = match self.config.site_link(path) {
            Ok(url) => url,
            Err(e) => {
                log::error!("cannot build link for {}: {}", path, e);
                return;
            }
        };
        println!("→ {}", url);
        if self.config.open_browser {
            if let Err(e) = webbrowser::open(url.as_str()) {
                log::warn!("failed to open browser: {}", e);
            }
        }
    }
}

pub struct AlertReporter;

impl ErrorReporter for AlertReporter {
    fn report(&mut self, error: &CollectionError) {
        log::error!("{}", error);
        eprintln!("Error: {}", error);
    }
}

pub async fn with_spinner<F, T>(message: &str, work: F) -> T
where
    F: Future<Output = T>,
{
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    let result = work.await;
    pb.finish_and_clear();
    result
}

fn pad(text: &str, width: usize, right: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    if right {
        format!("{}{}", fill, text)
    } else {
        format!("{}{}", text, fill)
    }
}

pub fn format_table<S: PageSource>(view: &CollectionListView<S>) -> String {
    let headers: Vec<String> = std::iter::once("#".to_string())
        .chain(view.columns().iter().map(|c| c.header.clone()))
        .collect();
    // Columns whose class carries "right" are right aligned.
    let right: Vec<bool> = std::iter::once(true)
        .chain(view.columns().iter().map(|c| {
            view.rows()
                .first()
                .map(|row| c.class_name.resolve(row).split_whitespace().any(|cls| cls == "right"))
                .unwrap_or(false)
        }))
        .collect();
    let body: Vec<Vec<String>> = view
        .rendered_rows()
        .iter()
        .enumerate()
        .map(|(i, cells)| {
            std::iter::once((i + 1).to_string())
                .chain(cells.iter().map(|cell| cell.plain()))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths.iter().zip(&right))
            .map(|(c, (w, r))| pad(c, *w, *r))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = vec![line(headers.as_slice())];
    out.push(
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.extend(body.iter().map(|row| line(row.as_slice())));
    out.push(format!(
        "Page {} of {} ({} collections, ordered by {})",
        view.page(),
        view.num_pages(),
        view.count(),
        view.order_by().join(", ")
    ));
    out.join("\n")
}
