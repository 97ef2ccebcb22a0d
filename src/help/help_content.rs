/// Key / description pairs. An empty key marks a section header; an empty
/// pair is a spacer line.
pub const HELP_ENTRIES: &[(&str, &str)] = &[
    ("", "GLOBAL"),
    ("F1", "Toggle this help"),
    ("F5", "Calculate statistics"),
    ("Tab", "Focus next field"),
    ("Shift+Tab", "Focus previous field"),
    ("Esc / Ctrl+C", "Quit"),
    ("", ""),
    ("", "NAME / NUMBERS"),
    ("Typing", "Edit the field (outputs update live)"),
    ("Enter", "Next field (Name) / new line (Numbers)"),
    ("", ""),
    ("", "TEXT STYLE"),
    ("←/→ or Space", "Cycle bold / italic / code"),
    ("", ""),
    ("", "CALCULATE STATS"),
    ("Enter / Space", "Calculate statistics"),
    ("", ""),
    ("", "STATISTICS"),
    ("PgUp / PgDn", "Scroll the statistics card"),
];

pub const HELP_FOOTER: &str = "Press F1, Esc or q to close";
