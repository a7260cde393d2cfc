// Typed widget configuration.
//
// Defaults come from `constants.rs`. A container may override them once at
// construction through `data-*` attributes; malformed values are reported and
// the default is kept.

use super::constants::TARGET_FPS;
use super::error::HelixError;
use super::helix::HelixConfig;
use super::motion::MotionParams;
use super::scene::{srgb_hex_to_linear, Palette};

pub const DEFAULT_CONTAINER_SELECTOR: &str = ".dna-helix";
const LOW_END_MAX_VIEWPORT: f64 = 1024.0;
const LOW_END_MAX_CORES: f64 = 4.0;

/// Mutually exclusive navigation behaviours.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavProfile {
    /// Menu toggle, close-on-link, scrolled navbar.
    #[default]
    Lightweight,
    /// Lightweight plus body scroll lock and active-link highlighting.
    Full,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorProfile {
    #[default]
    Native,
    /// Two smoothed follower elements trail the pointer.
    Custom,
}

impl NavProfile {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lightweight" | "light" => Some(Self::Lightweight),
            "full" => Some(Self::Full),
            _ => None,
        }
    }
}

impl CursorProfile {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "native" | "none" => Some(Self::Native),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

#[derive(Clone, Debug)]
pub struct WidgetConfig {
    pub container_selector: String,
    pub helix: HelixConfig,
    pub palette: Palette,
    pub motion: MotionParams,
    pub nav: NavProfile,
    pub cursor: CursorProfile,
    pub target_fps: f32,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            container_selector: DEFAULT_CONTAINER_SELECTOR.to_string(),
            helix: HelixConfig::default(),
            palette: Palette::default(),
            motion: MotionParams::default(),
            nav: NavProfile::default(),
            cursor: CursorProfile::default(),
            target_fps: TARGET_FPS,
        }
    }
}

impl WidgetConfig {
    /// Apply `data-*` overrides. `lookup` receives the attribute name without
    /// the `data-` prefix. Returns every rejected value.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Vec<HelixError> {
        let mut errors = Vec::new();

        let h = self.helix;
        let radius = parse_or(&lookup, "radius", h.radius(), &mut errors);
        let height = parse_or(&lookup, "height", h.height(), &mut errors);
        let turns = parse_or(&lookup, "turns", h.turn_count(), &mut errors);
        let spt = parse_or(&lookup, "samples-per-turn", h.samples_per_turn(), &mut errors);
        let stride = parse_or(&lookup, "stride", h.cross_link_stride(), &mut errors);
        match HelixConfig::new(radius, height, turns, spt, stride) {
            Ok(cfg) => self.helix = cfg,
            Err(e) => errors.push(e),
        }

        for (key, slot) in [
            ("strand-a", &mut self.palette.strand_a),
            ("strand-b", &mut self.palette.strand_b),
            ("link", &mut self.palette.link),
        ] {
            if let Some(raw) = lookup(key) {
                match parse_hex_color(&raw) {
                    Some(hex) => *slot = srgb_hex_to_linear(hex),
                    None => errors.push(HelixError::InvalidOption { key, value: raw }),
                }
            }
        }

        if let Some(raw) = lookup("nav") {
            match NavProfile::parse(&raw) {
                Some(p) => self.nav = p,
                None => errors.push(HelixError::InvalidOption { key: "nav", value: raw }),
            }
        }
        if let Some(raw) = lookup("cursor") {
            match CursorProfile::parse(&raw) {
                Some(p) => self.cursor = p,
                None => errors.push(HelixError::InvalidOption {
                    key: "cursor",
                    value: raw,
                }),
            }
        }
        errors
    }

    /// Reduced-motion users get a still helix and no custom cursor.
    pub fn apply_reduced_motion(&mut self) {
        self.motion = MotionParams::still();
        self.cursor = CursorProfile::Native;
    }

    /// Small, low-core devices keep the native cursor.
    pub fn apply_device_limits(&mut self, viewport_width: f64, hardware_concurrency: f64) {
        if low_end_device(viewport_width, hardware_concurrency) {
            self.cursor = CursorProfile::Native;
        }
    }
}

/// Tablet-sized viewport on a machine with four cores or fewer.
pub fn low_end_device(viewport_width: f64, hardware_concurrency: f64) -> bool {
    viewport_width <= LOW_END_MAX_VIEWPORT && hardware_concurrency <= LOW_END_MAX_CORES
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    errors: &mut Vec<HelixError>,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse::<T>() {
            Ok(v) => v,
            Err(_) => {
                errors.push(HelixError::InvalidOption { key, value: raw });
                default
            }
        },
    }
}

/// `#rrggbb` or `rrggbb`.
pub fn parse_hex_color(s: &str) -> Option<u32> {
    let s = s.trim();
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

/// Container size (CSS px) for a given viewport width.
pub fn responsive_container_size(viewport_width: f64) -> (u32, u32) {
    if viewport_width <= 480.0 {
        (240, 300)
    } else if viewport_width <= 1024.0 {
        (280, 350)
    } else {
        (400, 500)
    }
}

/// Value for the `--font-size-mobile` custom property.
pub fn responsive_font_size(viewport_width: f64) -> &'static str {
    if viewport_width <= 480.0 {
        "14px"
    } else {
        "16px"
    }
}
