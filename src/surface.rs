use iced_layershell::reexport::{Anchor, KeyboardInteractivity, Layer, NewLayerShellSettings};

const SURFACE_SIZE: (u32, u32) = (360, 160);
const TOP_MARGIN: i32 = 24;

fn make_output_option(output: Option<&str>) -> iced_layershell::reexport::OutputOption {
    match output {
        Some(name) => iced_layershell::reexport::OutputOption::OutputName(name.to_string()),
        None => iced_layershell::reexport::OutputOption::None,
    }
}

fn clock_settings(
    output: Option<&str>,
    keyboard_interactivity: KeyboardInteractivity,
) -> NewLayerShellSettings {
    NewLayerShellSettings {
        layer: Layer::Overlay,
        anchor: Anchor::Top,
        keyboard_interactivity,
        exclusive_zone: Some(-1),
        size: Some(SURFACE_SIZE),
        margin: Some((TOP_MARGIN, 0, 0, 0)),
        events_transparent: false,
        output_option: make_output_option(output),
        ..Default::default()
    }
}

/// Shown, hoverable, no keyboard.
pub(crate) fn visible_settings(output: Option<&str>) -> NewLayerShellSettings {
    clock_settings(output, KeyboardInteractivity::None)
}

/// Shown and receiving the key stream.
pub(crate) fn focused_settings(output: Option<&str>) -> NewLayerShellSettings {
    clock_settings(output, KeyboardInteractivity::OnDemand)
}
