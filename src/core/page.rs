// Pure decisions behind the page behaviours (navigation, scroll, counters).

// Scroll thresholds (CSS px)
pub const NAVBAR_SCROLLED_Y: f64 = 50.0;
pub const SCROLL_TOP_SHOW_Y: f64 = 300.0;
pub const ACTIVE_SECTION_MARGIN: f64 = 50.0;
pub const HOME_ACTIVE_BELOW_Y: f64 = 400.0;
pub const HOME_SECTION_ID: &str = "home";

// Stat counter
pub const STAT_COUNTER_STEPS: u32 = 50;
pub const STAT_COUNTER_INTERVAL_MS: i32 = 30;

// Staggered pipeline entrance
pub const PIPELINE_STEP_DELAY_MS: i32 = 200;
pub const PIPELINE_ARROW_EXTRA_MS: i32 = 100;

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLLED_Y
}

#[inline]
pub fn show_scroll_top(scroll_y: f64) -> bool {
    scroll_y > SCROLL_TOP_SHOW_Y
}

/// Id of the section the navbar should mark as active.
///
/// `sections` are `(id, offset_top)` in document order. The last section whose
/// top has scrolled past the navbar wins; near the top of the page the home
/// link is always active.
pub fn active_section<'a>(
    sections: &[(&'a str, f64)],
    scroll_y: f64,
    navbar_height: f64,
) -> Option<&'a str> {
    if scroll_y < HOME_ACTIVE_BELOW_Y {
        return Some(HOME_SECTION_ID);
    }
    sections
        .iter()
        .filter(|(_, top)| scroll_y >= top - (navbar_height + ACTIVE_SECTION_MARGIN))
        .last()
        .map(|(id, _)| *id)
}

/// Scroll offset that lands a section just below a fixed navbar.
#[inline]
pub fn anchor_scroll_target(element_top: f64, navbar_height: f64) -> f64 {
    (element_top - navbar_height).max(0.0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSuffix {
    None,
    Percent,
    Millions,
}

/// Counts a statistic up from zero to its final value in fixed increments.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    target: f64,
    current: f64,
    increment: f64,
    suffix: StatSuffix,
}

impl StatCounter {
    /// Parse a stat label such as `"95%"`, `"10M"` or `"1,200"`. Non-digit
    /// characters are ignored; labels without digits are left alone.
    pub fn parse(label: &str) -> Option<Self> {
        let digits: String = label.chars().filter(|c| c.is_ascii_digit()).collect();
        let target: f64 = digits.parse::<u64>().ok()? as f64;
        let suffix = if label.contains('%') {
            StatSuffix::Percent
        } else if label.contains('M') {
            StatSuffix::Millions
        } else {
            StatSuffix::None
        };
        Some(Self {
            target,
            current: 0.0,
            increment: target / STAT_COUNTER_STEPS as f64,
            suffix,
        })
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        self.current >= self.target
    }

    /// Advance one step and return the label to display.
    pub fn step(&mut self) -> String {
        let next = self.current + self.increment;
        // Snap the last step so float drift cannot leave the label one short
        self.current = if next + self.increment * 0.5 >= self.target {
            self.target
        } else {
            next
        };
        self.label()
    }

    pub fn label(&self) -> String {
        let n = self.current.floor() as u64;
        match self.suffix {
            StatSuffix::None => n.to_string(),
            StatSuffix::Percent => format!("{n}%"),
            StatSuffix::Millions => format!("{n}M"),
        }
    }
}
