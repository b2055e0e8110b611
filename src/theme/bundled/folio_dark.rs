//! Folio Dark - default palette
//! Indigo and violet accents over a near-black slate

pub const THEME: &str = r##"# Folio Dark theme
# Indigo and violet accents over a near-black slate

[meta]
name = "Folio Dark"
version = 1
author = "folio"

[ui]
background = "#0b0d17"
foreground = "#e2e4f0"
border = "#272a3d"
border_focused = "#6366f1"
title = "#a855f7"
status_bar = "#9aa0b8"
selection_bg = "#1e2136"
selection_fg = "#f5f6fb"
muted = "#7c8199"
border_type = "rounded"

[page]
heading = "#f5f6fb"
accent = "#6366f1"
accent_alt = "#a855f7"
highlight = "#ec4899"
link = "#06b6d4"
success = "#34d399"

[gauge]
fill = "#6366f1"
track = "#272a3d"
"##;
