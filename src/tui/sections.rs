// Section renderers
//
// Each section appends its rows to the document builder. Rows are plain
// ratatui Lines so the same document serves the TUI page and `folio print`.
// Layout only depends on the width and the viewport height; the typewriter
// text and the copy indicator never change a section's row count.

use super::document::{Button, Document, DocumentBuilder, HotspotAction};
use crate::portfolio::{Portfolio, SectionHeader};
use crate::section::SectionId;
use crate::theme::Theme;
use crate::util::{display_width, truncate_to_width};
use chrono::{Datelike, Local};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

/// Widest skill gauge, in cells
const GAUGE_MAX: usize = 30;

/// Column reserved for skill names
const SKILL_NAME_WIDTH: usize = 18;

/// Everything a section needs to lay itself out
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub theme: &'a Theme,
    /// Text width in columns
    pub width: usize,
    /// Visible rows; hero and contact are at least this tall
    pub viewport_height: usize,
    /// Typewriter text currently shown in the hero
    pub typed: &'a str,
    /// Email was just copied
    pub copied: bool,
}

/// Lay out the whole page
pub fn build(ctx: &PageContext) -> Document {
    let mut b = DocumentBuilder::new(ctx.width);

    b.section(SectionId::Home);
    hero(&mut b, ctx);

    b.section(SectionId::About);
    about(&mut b, ctx);

    b.section(SectionId::Skills);
    skills(&mut b, ctx);

    b.section(SectionId::Projects);
    projects(&mut b, ctx);

    b.section(SectionId::Experience);
    experience(&mut b, ctx);

    b.section(SectionId::Contact);
    contact(&mut b, ctx);

    b.finish()
}

fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

/// Label, title and subtitle shared by every content section
fn header(b: &mut DocumentBuilder, header: &SectionHeader, theme: &Theme) {
    b.blanks(2);
    let label = format!("── {} ──", header.label.to_uppercase());
    b.line(Line::from(Span::styled(label, bold(Style::default().fg(theme.accent)))));
    b.paragraph(&header.title, 0, bold(Style::default().fg(theme.heading)));
    if !header.subtitle.is_empty() {
        b.paragraph(&header.subtitle, 0, Style::default().fg(theme.muted));
    }
    b.blank();
}

fn hero(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let profile = &ctx.portfolio.profile;
    let hero = &ctx.portfolio.hero;

    b.blanks(2);
    if let Some(badge) = &profile.badge {
        b.line(Line::from(vec![
            Span::styled("● ", Style::default().fg(theme.success)),
            Span::styled(badge.clone(), Style::default().fg(theme.success)),
        ]));
        b.blank();
    }

    b.paragraph(&profile.full_name(), 0, bold(Style::default().fg(theme.heading)));
    b.paragraph(&profile.role, 0, bold(Style::default().fg(theme.accent)));
    b.blank();

    // One row whatever the phrase length, so regions stay put while typing
    let lead = format!("{} ", hero.lead);
    let room = ctx.width.saturating_sub(display_width(&lead) + 1);
    b.line(Line::from(vec![
        Span::styled(lead, Style::default().fg(theme.foreground)),
        Span::styled(
            truncate_to_width(ctx.typed, room),
            bold(Style::default().fg(theme.emphasis)),
        ),
        Span::styled("▌", Style::default().fg(theme.accent)),
    ]));
    b.blank();

    b.paragraph(&profile.description, 0, Style::default().fg(theme.foreground));
    b.line(Line::from(Span::styled(
        format!("⌖ {}", profile.location),
        Style::default().fg(theme.muted),
    )));
    b.blank();

    b.buttons(
        0,
        vec![
            Button {
                label: "Explore my work (w)".to_string(),
                style: bold(
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.accent),
                ),
                action: HotspotAction::Navigate(SectionId::About),
            },
            Button {
                label: "Get in touch (i)".to_string(),
                style: Style::default().fg(theme.accent),
                action: HotspotAction::Navigate(SectionId::Contact),
            },
        ],
    );
    b.blank();
    b.line(Line::from(Span::styled(
        "↓ scroll, or press 1-6 to jump",
        Style::default().fg(theme.muted),
    )));

    b.pad_section_to(ctx.viewport_height);
}

fn about(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let about = &ctx.portfolio.about;
    let text = Style::default().fg(theme.foreground);

    header(b, &about.header, theme);
    b.paragraph(&about.greeting, 0, bold(Style::default().fg(theme.heading)));
    b.blank();
    for paragraph in &about.paragraphs {
        b.paragraph(paragraph, 0, text);
        b.blank();
    }

    if !about.stats.is_empty() {
        for stat in &about.stats {
            b.line(Line::from(vec![
                Span::styled(format!("  {:>6}  ", stat.value), bold(Style::default().fg(theme.accent))),
                Span::styled(stat.label.clone(), Style::default().fg(theme.muted)),
            ]));
        }
        b.blank();
    }

    if !about.technologies.is_empty() {
        b.line(Line::from(Span::styled("Technologies", bold(Style::default().fg(theme.heading)))));
        b.paragraph(&about.technologies.join(" · "), 2, Style::default().fg(theme.accent_alt));
        b.blank();
    }

    if let Some(education) = &about.education {
        b.line(Line::from(Span::styled("Education", bold(Style::default().fg(theme.heading)))));
        b.paragraph(
            &format!("{}, {}", education.degree, education.field),
            2,
            bold(text),
        );
        b.paragraph(
            &format!("{} · {} · {}", education.school, education.location, education.period),
            2,
            Style::default().fg(theme.muted),
        );
        for focus in &education.focus {
            b.bullet("• ", focus, 2, Style::default().fg(theme.accent), text);
        }
        b.blank();
    }

    for fact in &about.facts {
        b.bullet("✓ ", fact, 0, Style::default().fg(theme.success), text);
    }
}

fn skills(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let skills = &ctx.portfolio.skills;

    header(b, &skills.header, theme);

    // name column + gauge + " 100%"
    let gauge = ctx
        .width
        .saturating_sub(SKILL_NAME_WIDTH + 2 + 5)
        .min(GAUGE_MAX);

    for category in &skills.categories {
        b.line(Line::from(Span::styled(
            category.title.clone(),
            bold(Style::default().fg(theme.heading)),
        )));
        if !category.description.is_empty() {
            b.paragraph(&category.description, 0, Style::default().fg(theme.muted));
        }
        for skill in &category.skills {
            let filled = gauge * usize::from(skill.level.min(100)) / 100;
            let name = truncate_to_width(&skill.name, SKILL_NAME_WIDTH);
            let pad = SKILL_NAME_WIDTH.saturating_sub(display_width(&name));
            b.line(Line::from(vec![
                Span::styled(format!("  {}{}", name, " ".repeat(pad)), Style::default().fg(theme.foreground)),
                Span::styled("█".repeat(filled), Style::default().fg(theme.gauge_fill)),
                Span::styled("░".repeat(gauge - filled), Style::default().fg(theme.gauge_track)),
                Span::styled(format!(" {:>3}%", skill.level), Style::default().fg(theme.muted)),
            ]));
        }
        b.blank();
    }
}

fn projects(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let projects = &ctx.portfolio.projects;

    header(b, &projects.header, theme);
    for project in &projects.items {
        b.line(Line::from(vec![
            Span::styled("▍ ", Style::default().fg(theme.accent)),
            Span::styled(project.title.clone(), bold(Style::default().fg(theme.heading))),
        ]));
        b.paragraph(&project.description, 2, Style::default().fg(theme.foreground));
        if !project.link.is_empty() {
            b.paragraph(&format!("↗ {}", project.link), 2, Style::default().fg(theme.link));
        }
        b.blank();
    }
}

fn experience(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let experience = &ctx.portfolio.experience;
    let text = Style::default().fg(theme.foreground);

    header(b, &experience.header, theme);
    for role in &experience.roles {
        let mut title = vec![
            Span::styled("● ", Style::default().fg(theme.accent)),
            Span::styled(role.title.clone(), bold(Style::default().fg(theme.heading))),
        ];
        if role.current {
            title.push(Span::styled("  current", bold(Style::default().fg(theme.success))));
        }
        b.line(Line::from(title));
        b.paragraph(
            &format!("{} · {}", role.company, role.location),
            2,
            Style::default().fg(theme.accent),
        );
        b.paragraph(&role.period, 2, Style::default().fg(theme.muted));
        for highlight in &role.highlights {
            b.bullet("• ", highlight, 2, Style::default().fg(theme.accent), text);
        }
        if !role.technologies.is_empty() {
            b.paragraph(&role.technologies.join(" · "), 2, Style::default().fg(theme.accent_alt));
        }
        b.blank();
    }

    testimonials(b, ctx);
}

// Rendered inside Experience: it has no anchor of its own
fn testimonials(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let testimonials = &ctx.portfolio.testimonials;
    if testimonials.items.is_empty() {
        return;
    }

    header(b, &testimonials.header, theme);
    for item in &testimonials.items {
        let rating = usize::from(item.rating.min(5));
        b.line(Line::from(vec![
            Span::styled("★".repeat(rating), Style::default().fg(theme.emphasis)),
            Span::styled("☆".repeat(5 - rating), Style::default().fg(theme.muted)),
        ]));
        b.paragraph(
            &format!("“{}”", item.quote),
            2,
            Style::default().fg(theme.foreground).add_modifier(Modifier::ITALIC),
        );
        b.line(Line::from(vec![
            Span::styled(format!("  {} ", item.initials()), bold(Style::default().fg(theme.accent))),
            Span::styled(item.name.clone(), bold(Style::default().fg(theme.heading))),
        ]));
        b.paragraph(
            &format!("{} · {}", item.role, item.organization),
            2,
            Style::default().fg(theme.muted),
        );
        if let Some(link) = &item.link {
            b.paragraph(&format!("↗ {}", link), 2, Style::default().fg(theme.link));
        }
        b.blank();
    }
}

fn contact(b: &mut DocumentBuilder, ctx: &PageContext) {
    let theme = ctx.theme;
    let contact = &ctx.portfolio.contact;
    let email = &ctx.portfolio.profile.email;

    header(b, &contact.header, theme);
    b.paragraph(&contact.heading, 0, bold(Style::default().fg(theme.heading)));
    b.paragraph(&contact.text, 0, Style::default().fg(theme.foreground));
    b.blank();

    b.paragraph(&format!("✉ {}", email), 0, bold(Style::default().fg(theme.link)));
    let copy = Button {
        label: "Copy email (c)".to_string(),
        style: Style::default().fg(theme.accent),
        action: HotspotAction::CopyEmail,
    };
    let row = b.row();
    b.buttons(0, vec![copy]);
    if ctx.copied {
        // Same row either way; the acknowledgement rides next to the button
        if let Some(line) = b.line_mut(row) {
            line.spans.push(Span::styled("  ✓ Copied!", bold(Style::default().fg(theme.success))));
        }
    }
    b.blank();

    for social in &contact.socials {
        b.line(Line::from(vec![
            Span::styled(format!("  {:<10}", social.name), Style::default().fg(theme.muted)),
            Span::styled(social.href.clone(), Style::default().fg(theme.link)),
        ]));
    }
    b.blanks(2);
    b.line(Line::from(Span::styled(
        format!(
            "© {} {} · built for the terminal",
            Local::now().year(),
            ctx.portfolio.profile.full_name()
        ),
        Style::default().fg(theme.muted),
    )));

    // The last section must be able to reach the tracking band
    b.pad_section_to(ctx.viewport_height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use crate::tracker::RegionLookup;

    fn page(width: usize, height: usize, copied: bool) -> Document {
        let portfolio = Portfolio::bundled().unwrap();
        let theme = Theme::for_mode(ThemeMode::Dark);
        build(&PageContext {
            portfolio: &portfolio,
            theme: &theme,
            width,
            viewport_height: height,
            typed: "end-to-end",
            copied,
        })
    }

    #[test]
    fn sections_are_contiguous_and_ordered() {
        let doc = page(80, 30, false);
        let mut expected_top = 0;
        for section in SectionId::ALL {
            let region = doc.region(section).unwrap();
            assert_eq!(region.top, expected_top, "{:?}", section);
            assert!(region.height > 0);
            expected_top = region.bottom();
        }
        assert_eq!(expected_top, doc.height());
    }

    #[test]
    fn hero_and_contact_fill_the_viewport() {
        let doc = page(100, 60, false);
        assert!(doc.region(SectionId::Home).unwrap().height >= 60);
        assert!(doc.region(SectionId::Contact).unwrap().height >= 60);
    }

    #[test]
    fn copy_indicator_does_not_move_rows() {
        let before = page(70, 24, false);
        let after = page(70, 24, true);
        assert_eq!(before.regions, after.regions);
        assert!(after.plain_text().contains("Copied!"));
        assert!(!before.plain_text().contains("Copied!"));
    }

    #[test]
    fn hero_ctas_are_clickable() {
        let doc = page(80, 24, false);
        let actions: Vec<_> = doc.hotspots.iter().map(|h| h.action).collect();
        assert!(actions.contains(&HotspotAction::Navigate(SectionId::About)));
        assert!(actions.contains(&HotspotAction::Navigate(SectionId::Contact)));
        assert!(actions.contains(&HotspotAction::CopyEmail));
    }

    #[test]
    fn narrow_width_still_lays_out() {
        let doc = page(12, 10, false);
        assert!(doc.height() > 0);
        for section in SectionId::ALL {
            assert!(doc.region(section).is_some());
        }
    }
}
