//! Where reports are printed.

/// Sink for report lines. Reports say what to show; the sink decides how.
pub trait Output {
    /// `label: value`
    fn field(&mut self, label: &str, value: &str);

    /// A labelled separator line.
    fn rule(&mut self, label: &str);

    /// Text printed as is.
    fn text(&mut self, text: &str);

    fn gap(&mut self);
}

/// A report printable to any [`Output`].
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Prints to stdout; logs and warnings go to stderr separately.
#[derive(Debug, Default)]
pub struct TerminalOutput;

impl TerminalOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Output for TerminalOutput {
    fn field(&mut self, label: &str, value: &str) {
        println!("{:<18} {}", format!("{}:", label), value);
    }

    fn rule(&mut self, label: &str) {
        println!("── {} ──", label);
    }

    fn text(&mut self, text: &str) {
        println!("{}", text);
    }

    fn gap(&mut self) {
        println!();
    }
}
