use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    pub face: Srgba<f64>,
    pub tick_major: Srgba<f64>,
    pub tick_minor: Srgba<f64>,
    pub excluded: Srgba<f64>,
    pub highlight: Srgba<f64>,
    pub highlight_edge: Srgba<f64>,
    pub needle_head: Srgba<f64>,
    pub needle_tail: Srgba<f64>,
    pub label: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        Self {
            face: Self::lookup_color(
                context,
                "borders",
                Srgba::new(0.4, 0.4, 0.4, 1.0),
                None,
            ),
            tick_major: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.2, 0.2, 0.2, 1.0),
                None,
            ),
            tick_minor: Self::lookup_color(
                context,
                "insensitive_fg_color",
                Srgba::new(0.73, 0.73, 0.73, 1.0),
                None,
            ),
            excluded: Self::lookup_color(
                context,
                "error_color",
                Srgba::new(1.0, 0.0, 0.0, 0.3),
                Some(0.3),
            ),
            highlight: Self::lookup_color(
                context,
                "theme_base_color",
                Srgba::new(1.0, 1.0, 1.0, 0.8),
                Some(0.8),
            ),
            highlight_edge: Srgba::new(0.0, 0.0, 0.0, 0.8),
            needle_head: Srgba::new(1.0, 0.0, 0.0, 1.0),
            needle_tail: Srgba::new(0.0, 0.0, 1.0, 1.0),
            label: Self::lookup_color(
                context,
                "theme_fg_color",
                Srgba::new(0.1, 0.1, 0.1, 1.0),
                None,
            ),
        }
    }

    fn lookup_color(
        context: &gtk::StyleContext,
        name: &str,
        fallback: Srgba<f64>,
        alpha_override: Option<f64>,
    ) -> Srgba<f64> {
        context
            .lookup_color(name)
            .map(|c| {
                let (r, g, b, a) = (
                    c.red() as f64,
                    c.green() as f64,
                    c.blue() as f64,
                    c.alpha() as f64,
                );
                Srgba::new(r, g, b, alpha_override.unwrap_or(a))
            })
            .unwrap_or(fallback)
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.compass-dial {
    background: none;
}
.compass-dial-value {
    font-feature-settings: \"tnum\";
    font-weight: bold;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
