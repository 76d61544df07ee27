use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::dial;
use crate::gui::theme::{self, ThemeColors};
use crate::gui::window::{self, WidgetRegion};
use gtk::prelude::*;
use gtk4 as gtk;
use radial::{Document, ElevationControl, ElevationSettings, HeadingControl, HeadingSettings};
use relm4::prelude::*;
use std::path::PathBuf;

pub struct AppModel {
    pub heading: HeadingControl,
    pub elevation: ElevationControl,
    pub heading_value: f64,
    pub elevation_value: f64,
    pub config_path: PathBuf,
    pub heading_area: gtk::DrawingArea,
    pub elevation_area: gtk::DrawingArea,
}

#[derive(Debug)]
pub enum AppMsg {
    HeadingCommitted(f64),
    ElevationCommitted(f64),
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        #[name = "window"]
        gtk::ApplicationWindow {
            set_title: Some("Compass"),
            set_resizable: false,

            gtk::Box {
                set_orientation: gtk::Orientation::Horizontal,
                set_spacing: 24,
                set_margin_all: 16,

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 8,

                    #[local_ref]
                    heading_area -> gtk::DrawingArea {
                        add_css_class: "compass-dial",
                    },

                    gtk::Label {
                        add_css_class: "compass-dial-value",
                        #[watch]
                        set_label: &format!("Heading {:.0}°", model.heading_value),
                    },
                },

                gtk::Box {
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 8,
                    set_valign: gtk::Align::Center,

                    #[local_ref]
                    elevation_area -> gtk::DrawingArea {
                        add_css_class: "compass-dial",
                    },

                    gtk::Label {
                        add_css_class: "compass-dial-value",
                        #[watch]
                        set_label: &format!("Elevation {:.0}", model.elevation_value),
                    },
                },
            }
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        theme::load_css();

        let document = Document::new();
        window::forward_pointer(&root, &document);

        let heading_area = gtk::DrawingArea::new();
        let elevation_area = gtk::DrawingArea::new();

        let heading = mount_heading(
            &config.heading,
            &document,
            WidgetRegion::new(&heading_area, &root),
            sender.clone(),
        );
        let elevation = mount_elevation(
            &config.elevation,
            &document,
            WidgetRegion::new(&elevation_area, &root),
            sender.clone(),
        );

        let model = AppModel {
            heading_value: heading.value(),
            elevation_value: elevation.value(),
            heading: heading.clone(),
            elevation: elevation.clone(),
            config_path,
            heading_area: heading_area.clone(),
            elevation_area: elevation_area.clone(),
        };
        model.resize_areas();

        let widgets = view_output!();

        {
            let heading = heading.clone();
            heading_area.set_draw_func(move |area, cr, width, height| {
                let colors = ThemeColors::from_context(&area.style_context());
                if let Err(e) = dial::draw_heading(cr, width, height, &heading, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });
        }
        {
            let elevation = elevation.clone();
            elevation_area.set_draw_func(move |area, cr, width, height| {
                let colors = ThemeColors::from_context(&area.style_context());
                if let Err(e) = dial::draw_elevation(cr, width, height, &elevation, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });
        }

        window::attach_press(&heading_area, {
            let heading = heading.clone();
            move || heading.pointer_down()
        });
        window::attach_teardown(&heading_area, move || heading.teardown());
        window::attach_press(&elevation_area, {
            let elevation = elevation.clone();
            move || elevation.pointer_down()
        });
        window::attach_teardown(&elevation_area, move || elevation.teardown());

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::HeadingCommitted(value) => {
                self.heading_value = value;
                self.heading_area.queue_draw();
            }
            AppMsg::ElevationCommitted(value) => {
                self.elevation_value = value;
                self.elevation_area.queue_draw();
            }
            AppMsg::ConfigReload => match config::load_config(&self.config_path) {
                Ok(new_config) => {
                    if let Err(e) = self.heading.reconfigure(&new_config.heading) {
                        log::error!("Failed to apply heading settings: {}", e);
                    }
                    if let Err(e) = self.elevation.reconfigure(&new_config.elevation) {
                        log::error!("Failed to apply elevation settings: {}", e);
                    }
                    self.resize_areas();
                    log::info!("Configuration reloaded");
                }
                Err(e) => log::error!("Failed to reload config: {}", e),
            },
        }
    }
}

impl AppModel {
    fn resize_areas(&self) {
        let heading = dial::content_size(self.heading.state().radius);
        self.heading_area.set_content_width(heading);
        self.heading_area.set_content_height(heading);

        let elevation = dial::content_size(self.elevation.state().radius);
        self.elevation_area.set_content_width(elevation);
        self.elevation_area.set_content_height(elevation);

        self.heading_area.queue_draw();
        self.elevation_area.queue_draw();
    }
}

/// Mounts the heading dial, falling back to the stock settings if `settings`
/// cannot be mounted.
fn mount_heading(
    settings: &HeadingSettings,
    document: &Document,
    region: WidgetRegion,
    sender: ComponentSender<AppModel>,
) -> HeadingControl {
    let on_commit = move |v| sender.input(AppMsg::HeadingCommitted(v));
    HeadingControl::mount(settings, 0.0, document, region.clone(), on_commit.clone())
        .unwrap_or_else(|e| {
            log::error!("Invalid heading settings ({}), using defaults", e);
            HeadingControl::mount(&HeadingSettings::default(), 0.0, document, region, on_commit)
                .expect("stock heading settings are valid")
        })
}

fn mount_elevation(
    settings: &ElevationSettings,
    document: &Document,
    region: WidgetRegion,
    sender: ComponentSender<AppModel>,
) -> ElevationControl {
    let on_commit = move |v| sender.input(AppMsg::ElevationCommitted(v));
    ElevationControl::mount(settings, 0.0, document, region.clone(), on_commit.clone())
        .unwrap_or_else(|e| {
            log::error!("Invalid elevation settings ({}), using defaults", e);
            ElevationControl::mount(
                &ElevationSettings::default(),
                0.0,
                document,
                region,
                on_commit,
            )
            .expect("stock elevation settings are valid")
        })
}
