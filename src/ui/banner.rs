// Thu Aug 27 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    style: BannerStyle,
    use_color: bool,
    width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerStyle {
    Simple,
    Box,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            style: BannerStyle::Box,
            use_color: true,
            width: 60,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_style(mut self, style: BannerStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn render(&self) -> String {
        match self.style {
            BannerStyle::Simple => self.render_simple(),
            BannerStyle::Box => self.render_box(),
        }
    }

    pub fn print(&self) {
        eprintln!("{}", self.render());
    }

    fn render_simple(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("=== {} ===", self.title));

        if let Some(subtitle) = &self.subtitle {
            lines.push(subtitle.clone());
        }

        if let Some(version) = &self.version {
            lines.push(format!("Version: {}", version));
        }

        lines.join("\n")
    }

    fn render_box(&self) -> String {
        let mut lines = Vec::new();
        let inner_width = self.width - 4;

        let h_line = "─".repeat(inner_width + 2);
        lines.push(format!("┌{}┐", h_line));

        let title_line = format!("{:^width$}", self.title, width = inner_width);
        if self.use_color {
            lines.push(format!("│ {} │", title_line.cyan().bold()));
        } else {
            lines.push(format!("│ {} │", title_line));
        }

        if let Some(subtitle) = &self.subtitle {
            let sub_line = format!("{:^width$}", subtitle, width = inner_width);
            lines.push(format!("│ {} │", sub_line));
        }

        if let Some(version) = &self.version {
            lines.push(format!("├{}┤", h_line));
            let ver_line = format!("{:^width$}", format!("v{}", version), width = inner_width);
            if self.use_color {
                lines.push(format!("│ {} │", ver_line.green()));
            } else {
                lines.push(format!("│ {} │", ver_line));
            }
        }

        lines.push(format!("└{}┘", h_line));

        lines.join("\n")
    }
}
