//! Folio Light - light counterpart of Folio Dark

pub const THEME: &str = r##"# Folio Light theme
# Same accents, tuned for a light background

[meta]
name = "Folio Light"
version = 1
author = "folio"

[ui]
background = "#f8f9fc"
foreground = "#1f2233"
border = "#d6d9e6"
border_focused = "#4f46e5"
title = "#7c3aed"
status_bar = "#4b5068"
selection_bg = "#e4e6f2"
selection_fg = "#11131f"
muted = "#6b7088"
border_type = "rounded"

[page]
heading = "#11131f"
accent = "#4f46e5"
accent_alt = "#7c3aed"
highlight = "#db2777"
link = "#0e7490"
success = "#059669"

[gauge]
fill = "#4f46e5"
track = "#d6d9e6"
"##;
