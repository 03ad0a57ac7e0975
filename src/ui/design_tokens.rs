// SPDX-License-Identifier: MPL-2.0
//! Design tokens shared by the toast overlay and the showcase page.
//!
//! Widgets never hard-code colors or sizes; they pick a token from one of the
//! scales below so that severities, spacing and elevation stay consistent.
//!
//! ```
//! use iced_toasts::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let hover = Color {
//!     a: opacity::OVERLAY_SUBTLE,
//!     ..palette::GRAY_400
//! };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = hover;
//! ```

use iced::Color;

pub mod palette {
    use super::Color;

    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);

    // One accent per notification severity
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const WARNING_500: Color = Color::from_rgb(0.945, 0.651, 0.125);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
    pub const INFO_500: Color = Color::from_rgb(0.392, 0.588, 1.0);
}

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OPAQUE: f32 = 1.0;

    /// Toast body background; slightly see-through so the page stays legible.
    pub const SURFACE: f32 = 0.95;
}

/// 8px baseline grid.
pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;

    /// Fixed width of a toast card in the overlay column.
    pub const TOAST_WIDTH: f32 = 320.0;
    /// Maximum width of the showcase form.
    pub const SHOWCASE_WIDTH: f32 = 560.0;
}

pub mod typography {
    //! Font sizes, from page heading down to status captions.

    pub const TITLE_LG: f32 = 30.0;
    /// Toast titles
    pub const BODY_LG: f32 = 16.0;
    /// Toast descriptions and form labels
    pub const BODY_SM: f32 = 13.0;
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Action button outline
    pub const WIDTH_SM: f32 = 1.0;
    /// Severity accent around a toast
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    /// Elevation of a visible toast above the page.
    pub const MD: Shadow = Shadow {
        color: Color::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

const _: () = {
    assert!(spacing::XXS < spacing::XS);
    assert!(spacing::XS < spacing::SM);
    assert!(spacing::SM < spacing::MD);
    assert!(spacing::MD < spacing::XL);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::SURFACE > opacity::OVERLAY_MEDIUM && opacity::SURFACE < opacity::OPAQUE);

    assert!(sizing::TOAST_WIDTH < sizing::SHOWCASE_WIDTH);

    assert!(typography::TITLE_LG > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);
    assert!(border::WIDTH_MD > border::WIDTH_SM);
};
