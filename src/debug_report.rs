use chislitel::DateTimeResultVerbose;

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.paint(s, BOLD)
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.paint(s, DIM)
        }
    }
}

pub fn print_run(res: &DateTimeResultVerbose, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &res.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Extracting: \"{}\"", res.text), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Chain ━━━", ansi::GRAY));
    if details.steps.is_empty() {
        println!("{}", palette.dim("  No rule matched"));
    }
    for (idx, step) in details.steps.iter().enumerate() {
        println!(
            "  {} {} {} {}{}",
            palette.paint(format!("[{idx}]"), ansi::GRAY),
            palette.paint(&step.rule, ansi::BLUE),
            palette.dim("│"),
            palette.paint(&step.offset, ansi::YELLOW),
            if step.terminal { palette.dim("  (terminal)") } else { String::new() },
        );
        println!("      {} {}", palette.dim("consumed:"), step.consumed.join(" "));
    }

    println!("\n{}", palette.paint("━━━ Result ━━━", ansi::GRAY));
    match &res.result {
        Some((when, rest)) => {
            println!("  {}", palette.bold(palette.paint(when.format("%Y-%m-%d %H:%M:%S").to_string(), ansi::GREEN)));
            println!("  {} {}", palette.dim("offset:"), details.offset);
            println!("  {} \"{}\"", palette.dim("leftover:"), rest);
        }
        None => println!("{}", palette.dim("  No datetime found")),
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    for (rule, duration, matched) in &details.attempts {
        let mark = if *matched { palette.paint("✓", ansi::GREEN) } else { palette.dim("✗") };
        println!("  {mark} {} {}", palette.paint(rule, ansi::CYAN), palette.dim(format!("{duration:?}")));
    }
    println!(
        "  Total: {}  │  Skipped by trigger: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(details.skipped.to_string()),
    );
    println!();
}
