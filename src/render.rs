//! Directory render engine — card view model, fee formatting and HTML.
//!
//! Rendering is a pure function of the filtered profiles and the expand
//! flag. The result is applied to the page by `directory::DirectoryPage`,
//! which replaces the grid content wholesale on every render.

use crate::models::Profile;

// ═══════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════

/// Cards shown while the list is collapsed.
pub const PAGE_SIZE: usize = 3;

pub const PLACEHOLDER_PHOTO: &str = "img/doctor-placeholder.png";
pub const DEFAULT_NAME: &str = "Profesional";
pub const LICENSE_SEPARATOR: &str = " · ";
pub const CURRENCY_PREFIX: &str = "$ ";
pub const EMPTY_MESSAGE: &str = "No encontramos profesionales con esos criterios.";
pub const SHOW_MORE_LABEL: &str = "Ver más";
pub const SHOW_LESS_LABEL: &str = "Ver menos";

// ═══════════════════════════════════════════
// View types
// ═══════════════════════════════════════════

/// Photo reference with a single fallback to the placeholder asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoSource {
    src: String,
    fallback_used: bool,
}

impl PhotoSource {
    /// Missing or empty references start on the placeholder.
    pub fn new(reference: Option<&str>) -> Self {
        let src = match reference {
            Some(r) if !r.is_empty() => r.to_string(),
            _ => PLACEHOLDER_PHOTO.to_string(),
        };
        Self {
            src,
            fallback_used: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    /// Handle a failed image load. Swaps to the placeholder the first time
    /// only; later failures are ignored. Returns whether a swap happened.
    pub fn on_load_error(&mut self) -> bool {
        if self.fallback_used {
            return false;
        }
        self.fallback_used = true;
        self.src = PLACEHOLDER_PHOTO.to_string();
        true
    }
}

/// One rendered staff card.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileCard {
    pub photo: PhotoSource,
    pub name: String,
    /// Specialty, followed by the license after a separator when present.
    pub subtitle: String,
    pub bio: Option<String>,
    pub plans: Vec<String>,
    pub fee_label: String,
}

impl ProfileCard {
    pub fn from_profile(profile: &Profile) -> Self {
        let name = match profile.name.as_deref() {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => DEFAULT_NAME.to_string(),
        };
        let mut subtitle = profile.specialty_text().to_string();
        if let Some(license) = profile.license.as_deref().filter(|l| !l.is_empty()) {
            subtitle.push_str(LICENSE_SEPARATOR);
            subtitle.push_str(license);
        }

        Self {
            photo: PhotoSource::new(profile.photo.as_deref()),
            name,
            subtitle,
            bio: profile.bio.clone().filter(|b| !b.is_empty()),
            plans: profile.accepted_plans.clone(),
            fee_label: format!("{CURRENCY_PREFIX}{}", format_fee(profile.fee)),
        }
    }

    pub fn to_html(&self) -> String {
        let name = escape_html(&self.name);
        let mut body = format!(
            "<h3 class=\"h6 card-title mb-1\">{name}</h3>\n\
             <p class=\"text-body-secondary mb-2\">{}</p>",
            escape_html(&self.subtitle)
        );
        if let Some(bio) = &self.bio {
            body.push_str(&format!(
                "\n<p class=\"card-text small mb-3\">{}</p>",
                escape_html(bio)
            ));
        }
        if !self.plans.is_empty() {
            let badges = self
                .plans
                .iter()
                .map(|p| {
                    format!(
                        "<span class=\"badge bg-light text-dark border\">{}</span>",
                        escape_html(p)
                    )
                })
                .collect::<Vec<_>>()
                .join(" ");
            body.push_str(&format!(
                "\n<div class=\"d-flex flex-wrap gap-1\">{badges}</div>"
            ));
        }

        format!(
            "<div class=\"col-12 col-sm-6 col-md-4\">\n\
             <article class=\"card h-100 shadow-sm\">\n\
             <img class=\"card-img-top\" src=\"{src}\" alt=\"{name}\" \
             onerror=\"this.onerror=null; this.src='{PLACEHOLDER_PHOTO}';\">\n\
             <div class=\"card-body\">\n{body}\n</div>\n\
             <div class=\"card-footer bg-white\">\n<strong>{fee}</strong>\n</div>\n\
             </article>\n\
             </div>",
            src = escape_html(self.photo.src()),
            fee = escape_html(&self.fee_label),
        )
    }
}

/// What the grid shows after a render.
#[derive(Debug, Clone, PartialEq)]
pub enum GridContent {
    /// No profile passed the filter.
    Empty,
    Cards(Vec<ProfileCard>),
}

impl GridContent {
    pub fn cards(&self) -> &[ProfileCard] {
        match self {
            GridContent::Empty => &[],
            GridContent::Cards(cards) => cards,
        }
    }

    pub fn to_html(&self) -> String {
        match self {
            GridContent::Empty => format!(
                "<div class=\"col-12\">\n\
                 <div class=\"alert alert-info text-center mb-0\">{EMPTY_MESSAGE}</div>\n\
                 </div>"
            ),
            GridContent::Cards(cards) => cards
                .iter()
                .map(ProfileCard::to_html)
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// State of the show-more / show-less control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    Hidden,
    Shown { label: &'static str },
}

/// Full output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryRender {
    pub grid: GridContent,
    pub affordance: Affordance,
    /// Size of the filtered set, before paging.
    pub total_matches: usize,
}

// ═══════════════════════════════════════════
// Render
// ═══════════════════════════════════════════

/// Render the filtered profiles. Collapsed shows the first `PAGE_SIZE`,
/// expanded shows all of them.
pub fn render_directory(matches: &[&Profile], expanded: bool) -> DirectoryRender {
    let total_matches = matches.len();
    if total_matches == 0 {
        return DirectoryRender {
            grid: GridContent::Empty,
            affordance: Affordance::Hidden,
            total_matches,
        };
    }

    let visible = if expanded {
        matches
    } else {
        &matches[..total_matches.min(PAGE_SIZE)]
    };
    let cards = visible.iter().map(|p| ProfileCard::from_profile(p)).collect();

    let affordance = if total_matches > PAGE_SIZE {
        Affordance::Shown {
            label: if expanded {
                SHOW_LESS_LABEL
            } else {
                SHOW_MORE_LABEL
            },
        }
    } else {
        Affordance::Hidden
    };

    DirectoryRender {
        grid: GridContent::Cards(cards),
        affordance,
        total_matches,
    }
}

/// Format a fee the es-AR way: `.` groups thousands, `,` marks decimals,
/// at most three fraction digits.
pub fn format_fee(amount: f64) -> String {
    if !amount.is_finite() {
        return "0".to_string();
    }

    // f64::round rounds half away from zero.
    let scaled = (amount.abs() * 1000.0).round();
    let whole = (scaled / 1000.0).trunc();
    let millis = (scaled - whole * 1000.0) as u32;

    let digits = format!("{whole:.0}");
    let mut out = String::new();
    if amount < 0.0 && scaled != 0.0 {
        out.push('-');
    }
    out.push_str(&group_thousands(&digits));

    if millis > 0 {
        let fraction = format!("{millis:03}");
        out.push(',');
        out.push_str(fraction.trim_end_matches('0'));
    }
    out
}

fn group_thousands(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Escape text for interpolation into HTML content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
