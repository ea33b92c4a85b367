use crate::backend::sample::SampleBackend;
use crate::backend::{Backend, BackendError, BackendResult, Scanner, scan_allowed};
use crate::controller::ScreenController;
use crate::models::{NetworkRecord, RecordSource, ViewMode};
use gtk4::gdk::Display;
use gtk4::prelude::*;
use gtk4::{
    Align, Application, ApplicationWindow, Box as GtkBox, Button, CssProvider, Image, Label,
    ListBox, ListBoxRow, Orientation, PolicyType, ScrolledWindow, gio, glib,
};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use std::sync::Arc;

/// Where each piece of data comes from.
#[derive(Clone)]
pub struct Backends {
    /// Permission and current-connection lookups
    pub probe: Arc<dyn Backend>,
    /// Network list
    pub scanner: Arc<dyn Scanner>,
    /// Loaded instead when the scanner fails
    pub fallback: Option<Arc<SampleBackend>>,
}

struct Screen {
    controller: RefCell<ScreenController>,
    ssid_value: Label,
    frequency_value: Label,
    advisory: Label,
    summary: Label,
    list: ListBox,
    fallback: Option<Arc<SampleBackend>>,
}

const ACTIONS: [ViewMode; 4] = [
    ViewMode::Band24,
    ViewMode::Band5,
    ViewMode::DualBand,
    ViewMode::NonDualBand,
];

pub fn build_ui(app: &Application, backends: &Backends, show_sort: bool) {
    load_css();

    let window = ApplicationWindow::builder()
        .application(app)
        .title("bandfi")
        .default_width(380)
        .default_height(760)
        .build();

    window.add_css_class("bandfi-window");

    let root = GtkBox::new(Orientation::Vertical, 0);
    root.set_margin_top(12);
    root.set_margin_bottom(12);
    root.set_margin_start(12);
    root.set_margin_end(12);

    let panel = GtkBox::new(Orientation::Vertical, 12);
    panel.add_css_class("bandfi-panel");

    let (ssid_row, ssid_value) = build_status_row("Connected to:");
    let (frequency_row, frequency_value) = build_status_row("Frequency:");
    let advisory = build_advisory();
    let list = build_network_list();
    let summary = Label::new(None);
    summary.add_css_class("bandfi-caption");
    summary.set_halign(Align::Start);

    let scroller = ScrolledWindow::new();
    scroller.set_hscrollbar_policy(PolicyType::Never);
    scroller.set_vexpand(true);
    scroller.set_child(Some(&list));

    let screen = Rc::new(Screen {
        controller: RefCell::new(ScreenController::new()),
        ssid_value,
        frequency_value,
        advisory,
        summary,
        list,
        fallback: backends.fallback.clone(),
    });
    screen.refresh_status();
    screen.refresh_list();

    panel.append(&ssid_row);
    panel.append(&frequency_row);
    panel.append(&screen.summary);
    panel.append(&scroller);
    panel.append(&screen.advisory);
    panel.append(&build_actions(&screen, show_sort));

    root.append(&panel);
    window.set_child(Some(&root));
    window.present();

    start_lookups(&screen, backends.clone());
}

impl Screen {
    fn select(&self, mode: ViewMode) {
        self.controller.borrow_mut().select(mode);
        self.refresh_list();
    }

    fn refresh_list(&self) {
        while let Some(child) = self.list.first_child() {
            self.list.remove(&child);
        }

        let controller = self.controller.borrow();
        for network in controller.view() {
            self.list.append(&build_network_row(network));
        }

        self.summary.set_text(&summary_text(
            controller.view().len(),
            controller.records().len(),
            controller.mode(),
            controller.source(),
        ));
    }

    fn refresh_status(&self) {
        let controller = self.controller.borrow();
        let status = controller.status();
        self.ssid_value
            .set_text(status.ssid.as_deref().unwrap_or("unknown"));
        self.frequency_value.set_text(
            &status
                .frequency_mhz
                .map_or_else(|| "unknown".to_string(), |f| format!("{f} MHz")),
        );
    }

    fn show_advisory(&self) {
        let advisory = self.controller.borrow().advisory();
        tracing::info!(?advisory, "Frequency check");

        self.advisory
            .set_text(&format!("{}\n{}", advisory.title(), advisory.message()));
        if advisory.is_mismatch() {
            self.advisory.add_css_class("bandfi-warning");
        } else {
            self.advisory.remove_css_class("bandfi-warning");
        }
        self.advisory.set_visible(true);
    }
}

fn build_status_row(caption: &str) -> (GtkBox, Label) {
    let row = GtkBox::new(Orientation::Horizontal, 6);

    let caption = Label::new(Some(caption));
    caption.add_css_class("bandfi-caption");
    caption.set_halign(Align::Start);

    let value = Label::new(None);
    value.add_css_class("bandfi-status");
    value.set_halign(Align::Start);

    row.append(&caption);
    row.append(&value);
    (row, value)
}

fn build_advisory() -> Label {
    let advisory = Label::new(None);
    advisory.add_css_class("bandfi-advisory");
    advisory.set_wrap(true);
    advisory.set_xalign(0.0);
    advisory.set_visible(false);
    advisory
}

fn build_network_list() -> ListBox {
    let list = ListBox::new();
    list.add_css_class("bandfi-list");
    list.set_selection_mode(gtk4::SelectionMode::None);
    list.set_show_separators(false);
    list.set_placeholder(Some(&Label::new(Some("No networks"))));

    list
}

fn build_network_row(network: &NetworkRecord) -> ListBoxRow {
    let row = ListBoxRow::new();
    row.add_css_class("bandfi-row");
    row.set_activatable(false);
    if !network.bssid.is_empty() {
        row.set_tooltip_text(Some(&network.bssid));
    }

    let container = GtkBox::new(Orientation::Horizontal, 8);
    container.set_margin_top(8);
    container.set_margin_bottom(8);
    container.set_margin_start(12);
    container.set_margin_end(12);

    let ssid = if network.ssid.is_empty() {
        "(hidden)"
    } else {
        network.ssid.as_str()
    };
    let label = Label::new(Some(&format!("{ssid} : {}", network.frequency_mhz)));
    label.add_css_class("bandfi-network-name");
    label.set_halign(Align::Start);
    label.set_hexpand(true);

    let icon = Image::from_icon_name(icon_for_strength(network.strength));
    icon.add_css_class("bandfi-network-icon");

    container.append(&label);
    container.append(&icon);

    row.set_child(Some(&container));
    row
}

fn build_actions(screen: &Rc<Screen>, show_sort: bool) -> GtkBox {
    let actions = GtkBox::new(Orientation::Vertical, 8);

    let mut modes = ACTIONS.to_vec();
    if show_sort {
        modes.insert(2, ViewMode::Band5Sorted);
    }

    for mode in modes {
        let button = primary_button(mode.label());
        let screen = screen.clone();
        button.connect_clicked(move |_| screen.select(mode));
        actions.append(&button);
    }

    let check = primary_button("Check my network frequency");
    let screen_check = screen.clone();
    check.connect_clicked(move |_| screen_check.show_advisory());
    actions.append(&check);

    let reset = Button::with_label(ViewMode::All.label());
    reset.add_css_class("bandfi-secondary");
    let screen_reset = screen.clone();
    reset.connect_clicked(move |_| screen_reset.select(ViewMode::All));
    actions.append(&reset);

    actions
}

fn primary_button(label: &str) -> Button {
    let button = Button::with_label(label);
    button.add_css_class("bandfi-primary");
    button.set_hexpand(true);
    button.set_halign(Align::Fill);
    button
}

/// Permission first; on grant the SSID, frequency and scan lookups run
/// concurrently and each lands in its own field.
fn start_lookups(screen: &Rc<Screen>, backends: Backends) {
    let screen = Rc::downgrade(screen);
    glib::spawn_future_local(async move {
        let probe = backends.probe.clone();
        let permission = run_blocking(move || probe.check_permission()).await;
        if !scan_allowed(&permission) {
            return;
        }

        let probe = backends.probe.clone();
        spawn_lookup(&screen, move || probe.current_ssid(), |screen, result| {
            screen.controller.borrow_mut().apply_ssid(result);
            screen.refresh_status();
        });

        let probe = backends.probe.clone();
        spawn_lookup(&screen, move || probe.current_frequency(), |screen, result| {
            screen.controller.borrow_mut().apply_frequency(result);
            screen.refresh_status();
        });

        let scanner = backends.scanner.clone();
        let source = scanner.source();
        spawn_lookup(&screen, move || scanner.rescan_and_list(), move |screen, result| {
            screen
                .controller
                .borrow_mut()
                .apply_scan(result, source, screen.fallback.as_deref());
            screen.refresh_list();
        });
    });
}

fn spawn_lookup<T, F, A>(screen: &Weak<Screen>, call: F, apply: A)
where
    T: Send + 'static,
    F: FnOnce() -> BackendResult<T> + Send + 'static,
    A: FnOnce(&Screen, BackendResult<T>) + 'static,
{
    let screen = screen.clone();
    glib::spawn_future_local(async move {
        let result = run_blocking(call).await;
        match screen.upgrade() {
            Some(screen) => apply(&screen, result),
            None => tracing::debug!("Window closed, discarding lookup result"),
        }
    });
}

async fn run_blocking<T, F>(call: F) -> BackendResult<T>
where
    T: Send + 'static,
    F: FnOnce() -> BackendResult<T> + Send + 'static,
{
    gio::spawn_blocking(call)
        .await
        .unwrap_or_else(|_| Err(BackendError::Unavailable("backend call panicked".to_string())))
}

/// Sample data is always labelled as such so it is never mistaken for a scan.
fn summary_text(shown: usize, total: usize, mode: ViewMode, source: RecordSource) -> String {
    let mut text = match mode {
        ViewMode::All => format!("{total} networks"),
        mode => format!("{shown} of {total} networks ({})", mode.label()),
    };
    if source == RecordSource::Sample {
        text.push_str(" [sample data]");
    }
    text
}

fn icon_for_strength(strength: u8) -> &'static str {
    match strength {
        0..=20 => "network-wireless-signal-none",
        21..=40 => "network-wireless-signal-weak",
        41..=60 => "network-wireless-signal-ok",
        61..=80 => "network-wireless-signal-good",
        _ => "network-wireless-signal-excellent",
    }
}

fn load_css() {
    let css = r#"
    .bandfi-window {
        background: #2b2b2b;
        color: #e6e6e6;
        font-family: "Cantarell", "Noto Sans", sans-serif;
    }

    .bandfi-panel {
        background: #2f2f2f;
        border-radius: 18px;
        padding: 12px;
    }

    .bandfi-caption {
        color: #cfcfcf;
    }

    .bandfi-status {
        color: #6fa8ff;
        font-weight: 600;
    }

    .bandfi-list {
        background: transparent;
    }

    .bandfi-row {
        background: #333333;
        border: 1px solid #444444;
        border-radius: 12px;
        margin-bottom: 4px;
    }

    .bandfi-network-name {
        font-size: 15px;
    }

    .bandfi-advisory {
        background: #3a3a3a;
        border-radius: 12px;
        padding: 10px;
    }

    .bandfi-warning {
        background: #5a2a2a;
    }

    .bandfi-primary {
        background: #2f7ae5;
        color: #ffffff;
        border-radius: 22px;
        padding: 8px 10px;
    }

    .bandfi-secondary {
        background: transparent;
        color: #2f7ae5;
        border: 1px solid #2f7ae5;
        border-radius: 22px;
        padding: 8px 10px;
    }
    "#;

    let provider = CssProvider::new();
    provider.load_from_data(css);

    if let Some(display) = Display::default() {
        gtk4::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk4::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_flags_sample_data() {
        assert_eq!(
            summary_text(23, 23, ViewMode::All, RecordSource::Sample),
            "23 networks [sample data]"
        );
        assert_eq!(
            summary_text(2, 3, ViewMode::DualBand, RecordSource::Live),
            "2 of 3 networks (Show dual-band networks)"
        );
        assert!(
            summary_text(4, 23, ViewMode::Band5, RecordSource::Sample).ends_with("[sample data]")
        );
    }

    #[test]
    fn strength_icons() {
        assert_eq!(icon_for_strength(0), "network-wireless-signal-none");
        assert_eq!(icon_for_strength(35), "network-wireless-signal-weak");
        assert_eq!(icon_for_strength(60), "network-wireless-signal-ok");
        assert_eq!(icon_for_strength(61), "network-wireless-signal-good");
        assert_eq!(icon_for_strength(100), "network-wireless-signal-excellent");
    }
}
