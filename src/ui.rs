use colored::Colorize;

/// Sink for transient user-visible notices.
///
/// The pipeline reports failures through this rather than returning them to
/// the event loop, which is fire-and-forget.
pub trait NoticeSink {
    fn notice(&self, message: &str);
}

/// Notice sink that prints to the console.
pub struct ConsoleNotices;

impl NoticeSink for ConsoleNotices {
    fn notice(&self, message: &str) {
        warning_message(message);
    }
}

/// Print a success message
pub fn success_message(message: &str) {
    println!("{} {}", "✅".green(), message.green());
}

/// Print a warning message
pub fn warning_message(message: &str) {
    eprintln!("{} {}", "⚠️ ".yellow(), message.yellow());
}

/// Print an error message
pub fn error_message(message: &str) {
    eprintln!("{} {}", "❌".red(), message.red().bold());
}

/// Print a simple informational message
pub fn info_message(message: &str) {
    println!("{} {}", "ℹ️ ".blue(), message.blue());
}
