use eframe::egui::Color32;

/// UI Colors for consistent theming
///
/// The figure itself is styled by `config::plot`; these cover the chrome
/// around it. Light theme throughout, matching the white-canvas look of the
/// published charts.
#[derive(Clone, Copy)]
pub struct UiColors {
    pub heading: Color32,
    pub label: Color32,
    pub side_panel: Color32,
    pub central_panel: Color32,
    pub error: Color32,
    pub warning: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    pub side_panel_min_width: f32,
    pub legend_swatch_size: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        heading: Color32::from_rgb(51, 51, 51),
        label: Color32::from_rgb(85, 85, 85),
        side_panel: Color32::from_rgb(244, 244, 246),
        central_panel: Color32::WHITE,
        error: Color32::from_rgb(178, 58, 72),
        warning: Color32::from_rgb(176, 122, 0),
    },
    side_panel_min_width: 230.0,
    legend_swatch_size: 14.0,
};

/// Every user-visible string in one place.
pub struct UiText {
    pub window_title: &'static str,
    pub range_heading: &'static str,
    pub start_label: &'static str,
    pub end_label: &'static str,
    pub input_format_hint: &'static str,
    pub reset_button: &'static str,
    pub legend_heading: &'static str,
    pub source_heading: &'static str,
    pub records_metric: &'static str,
    pub bullish_metric: &'static str,
    pub bearish_metric: &'static str,
    pub no_chart_placeholder: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Retail Sentiment Scope",
    range_heading: "Select Date Range",
    start_label: "Start datetime",
    end_label: "End datetime",
    input_format_hint: "YYYY-MM-DD HH:MM:SS",
    reset_button: "Reset to full range",
    legend_heading: "Trading Sessions",
    source_heading: "Data Source",
    records_metric: "Records in range",
    bullish_metric: "Bullish total",
    bearish_metric: "Bearish total",
    no_chart_placeholder: "Adjust the date range to build the charts.",
};
