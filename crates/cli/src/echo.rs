use owo_colors::OwoColorize;
use telegraph_core::{Account, Node, Page, PageList, PageViews};

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "Telegraph".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Publish HTML to telegra.ph\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

fn field(label: &str, value: &str) -> String {
    format!("{} {}\n", format!("{}:", label).dimmed(), value)
}

/// Human readable account summary
pub fn render_account(account: &Account) -> String {
    let mut out = String::new();
    if !account.short_name.is_empty() {
        out.push_str(&field("Short name", &account.short_name));
    }
    if !account.author_name.is_empty() {
        out.push_str(&field("Author", &account.author_name));
    }
    if !account.author_url.is_empty() {
        out.push_str(&field("Author URL", &account.author_url));
    }
    if let Some(count) = account.page_count {
        out.push_str(&field("Pages", &count.to_string()));
    }
    if let Some(auth_url) = &account.auth_url {
        out.push_str(&field("Auth URL", auth_url));
    }
    if let Some(token) = &account.access_token {
        out.push_str(&field("Access token", token));
    }
    out
}

/// Human readable page summary, followed by its text when content was returned
pub fn render_page(page: &Page) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", page.title.bold()));
    out.push_str(&field("URL", &page.url.underline().to_string()));
    out.push_str(&field("Path", &page.path));
    if let Some(author) = &page.author_name {
        out.push_str(&field("Author", author));
    }
    out.push_str(&field("Views", &page.views.to_string()));
    if let Some(content) = &page.content {
        out.push('\n');
        out.push_str(&render_content(content));
        out.push('\n');
    }
    out
}

/// Page list as one line per page
pub fn render_page_list(list: &PageList) -> String {
    let mut out = format!("{} {}\n", "Total:".dimmed(), list.total_count);
    for page in &list.pages {
        out.push_str(&format!(
            "  {}  {} {}\n",
            page.path.bright_white(),
            page.title,
            format!("({} views)", page.views).dimmed()
        ));
    }
    out
}

pub fn render_views(path: &str, views: &PageViews) -> String {
    format!("{} {}\n", format!("{}:", path).dimmed(), views.views)
}

/// Plain text of a content tree
pub fn render_content(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text_content).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.0 MB");
    }

    #[test]
    fn test_render_content() {
        let nodes = telegraph_core::nodes_from_html("<p>a<b>b</b></p>c").unwrap();
        assert_eq!(render_content(&nodes), "abc");
    }

    #[test]
    fn test_render_account_skips_missing() {
        let account = Account { short_name: "Sandbox".to_string(), ..Default::default() };
        let out = render_account(&account);
        assert!(out.contains("Sandbox"));
        assert!(!out.contains("Access token"));
    }
}
