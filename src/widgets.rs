//! Browser-independent state and styling behind the presentational
//! components in `app`.

use crate::theme::Theme;

pub const GOLD_GRADIENT: &str = "bg-gradient-to-r from-primary via-yellow-500 to-orange-400";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-sm",
            Self::Md => "px-6 py-3 text-base",
            Self::Lg => "px-8 py-4 text-lg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HoverEffect {
    #[default]
    Glow,
    Bright,
    Scale,
}

impl HoverEffect {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Glow => "hover:shadow-glow-primary",
            Self::Bright => "hover:brightness-110",
            Self::Scale => "hover:scale-105",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GradientStyle {
    /// Works on both themes.
    #[default]
    Gold,
    /// Follows the theme's primary/secondary colors.
    Primary,
}

impl GradientStyle {
    pub fn class(&self) -> &'static str {
        match self {
            Self::Gold => {
                "bg-gradient-to-r from-primary via-yellow-500 to-orange-400 bg-clip-text text-transparent"
            }
            Self::Primary => {
                "bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent dark:from-yellow-500 dark:to-orange-400"
            }
        }
    }
}

pub fn tab_button_class(active: bool) -> String {
    let state = if active {
        format!("{GOLD_GRADIENT} text-primary-foreground shadow-md")
    } else {
        "bg-muted text-muted-foreground hover:bg-muted/80".to_string()
    };
    format!(
        "px-4 py-2 rounded-md text-sm font-medium font-poppins transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed {state}"
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradientSegment {
    pub text: String,
    pub highlighted: bool,
}

/// Splits a title into words, highlighting every word that contains one of
/// `gradient_words` (case-insensitive). With no gradient words the whole
/// title is a single highlighted segment.
pub fn gradient_segments<S: AsRef<str>>(text: &str, gradient_words: &[S]) -> Vec<GradientSegment> {
    if gradient_words.is_empty() {
        return vec![GradientSegment {
            text: text.to_string(),
            highlighted: true,
        }];
    }
    let needles = gradient_words
        .iter()
        .map(|w| w.as_ref().to_lowercase())
        .collect::<Vec<_>>();
    text.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            GradientSegment {
                text: word.to_string(),
                highlighted: needles.iter().any(|n| lower.contains(n.as_str())),
            }
        })
        .collect()
}

pub const MAX_STARS: u8 = 5;

/// Filled stars for `rating`, padded with empty ones up to [`MAX_STARS`].
pub fn star_row(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    let mut row = "★".repeat(filled);
    row.push_str(&"☆".repeat(MAX_STARS as usize - filled));
    row
}

pub const SLIDER_MIN: f64 = 5.0;
pub const SLIDER_MAX: f64 = 95.0;

/// Divider position of the before/after image comparison, in percent of the
/// element width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonSlider {
    position: f64,
}

impl Default for ComparisonSlider {
    fn default() -> Self {
        Self { position: 50.0 }
    }
}

impl ComparisonSlider {
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Moves the divider under a pointer at `pointer_x`, given the element's
    /// bounding box. Degenerate boxes are ignored.
    pub fn track(&mut self, pointer_x: f64, left: f64, width: f64) {
        if width.is_nan() || width <= 0.0 || !pointer_x.is_finite() {
            return;
        }
        let pct = (pointer_x - left) / width * 100.0;
        self.position = pct.clamp(SLIDER_MIN, SLIDER_MAX);
    }

    /// Width of the clipped "before" image so it lines up with the full
    /// "after" image underneath.
    pub fn before_image_width(&self) -> f64 {
        100.0 / (self.position / 100.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Screenshot {
    pub before: Option<&'static str>,
    pub after: &'static str,
    pub label: &'static str,
}

impl Screenshot {
    /// No legacy page existed, so there is nothing to compare against.
    pub fn is_new_feature(&self) -> bool {
        self.before.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenshotTabs {
    active: usize,
    count: usize,
}

impl ScreenshotTabs {
    pub fn new(count: usize) -> Self {
        Self { active: 0, count }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns false, leaving the selection alone, when `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.count {
            return false;
        }
        self.active = index;
        true
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/services", label: "Services" },
    NavLink { href: "/about", label: "About" },
    NavLink { href: "/review", label: "Reviews" },
    NavLink { href: "/case-study", label: "Case Study" },
    NavLink { href: "/portfolio", label: "Portfolio" },
];

pub const CONTACT_LINK: NavLink = NavLink {
    href: "/contact",
    label: "Contact Us",
};

pub fn nav_item_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-header-foreground",
        Theme::Light => "text-gray-700 hover:text-black",
    }
}

pub fn mobile_nav_item_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-white hover:bg-gray-700",
        Theme::Light => "text-gray-700 hover:bg-gray-100",
    }
}

pub fn nav_surface_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "bg-[#1A2238] border-gray-700",
        Theme::Light => "bg-white border-gray-200",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_segments_without_words() {
        assert_eq!(
            gradient_segments::<&str>("Dale Tiffany", &[]),
            vec![GradientSegment {
                text: "Dale Tiffany".to_string(),
                highlighted: true
            }]
        );
    }

    #[test]
    fn test_gradient_segments_matches_case_insensitively() {
        let segs = gradient_segments("Key Features Delivered", &["delivered"]);
        let flags: Vec<(&str, bool)> = segs
            .iter()
            .map(|s| (s.text.as_str(), s.highlighted))
            .collect();
        assert_eq!(
            flags,
            vec![("Key", false), ("Features", false), ("Delivered", true)]
        );

        // substring match, like "After" inside "After:"
        let segs = gradient_segments("Before & After:", &["After".to_string()]);
        assert!(segs[2].highlighted);
        assert!(!segs[0].highlighted);
    }

    #[test]
    fn test_star_row() {
        assert_eq!(star_row(4), "★★★★☆");
        assert_eq!(star_row(0), "☆☆☆☆☆");
        assert_eq!(star_row(9), "★★★★★");
    }

    #[test]
    fn test_slider_clamps_and_starts_centered() {
        let mut slider = ComparisonSlider::default();
        assert_eq!(slider.position(), 50.0);

        slider.track(150.0, 100.0, 200.0);
        assert_eq!(slider.position(), 25.0);
        slider.track(100.0, 100.0, 200.0);
        assert_eq!(slider.position(), SLIDER_MIN);
        slider.track(400.0, 100.0, 200.0);
        assert_eq!(slider.position(), SLIDER_MAX);

        slider.track(150.0, 100.0, 0.0);
        assert_eq!(slider.position(), SLIDER_MAX);
        slider.track(f64::NAN, 100.0, 200.0);
        assert_eq!(slider.position(), SLIDER_MAX);
    }

    #[test]
    fn test_before_image_width() {
        let mut slider = ComparisonSlider::default();
        assert_eq!(slider.before_image_width(), 200.0);
        slider.track(25.0, 0.0, 100.0);
        assert_eq!(slider.before_image_width(), 400.0);
    }

    #[test]
    fn test_screenshot_tabs() {
        let mut tabs = ScreenshotTabs::new(3);
        assert_eq!(tabs.active(), 0);
        assert!(tabs.select(2));
        assert!(!tabs.select(3));
        assert_eq!(tabs.active(), 2);

        let shot = Screenshot {
            before: None,
            after: "/dale-tiffany/after-admin-crm.png",
            label: "CRM (New)",
        };
        assert!(shot.is_new_feature());
    }

    #[test]
    fn test_style_classes() {
        assert_eq!(ButtonSize::default().class(), "px-6 py-3 text-base");
        assert_eq!(HoverEffect::Scale.class(), "hover:scale-105");
        assert!(tab_button_class(true).contains(GOLD_GRADIENT));
        assert!(!tab_button_class(false).contains(GOLD_GRADIENT));
        assert!(GradientStyle::default().class().contains("bg-clip-text"));
        assert_ne!(nav_item_class(Theme::Dark), nav_item_class(Theme::Light));
    }
}
