//! Manual smoke test: prints the live system settings, then echoes settings
//! change events until interrupted. Change the accent color or text scaling
//! in the Settings app and watch the events come in.

#[cfg(target_os = "windows")]
fn main() {
    use winvm::{
        get_animations_enabled, get_auto_hide_scroll_bars, get_color_value, get_cursor_size,
        get_high_contrast, get_high_contrast_scheme, get_message_duration,
        get_text_scale_factor, is_dark_theme, listen_settings_events, UIColorType,
    };

    println!("accent            {:?}", get_color_value(UIColorType::Accent));
    println!("background        {:?}", get_color_value(UIColorType::Background));
    println!("dark theme        {:?}", is_dark_theme());
    println!("text scale        {:?}", get_text_scale_factor());
    println!("animations        {:?}", get_animations_enabled());
    println!("autohide scroll   {:?}", get_auto_hide_scroll_bars());
    println!("message duration  {:?}", get_message_duration());
    println!("cursor size       {:?}", get_cursor_size());
    println!("high contrast     {:?}", get_high_contrast());
    println!("contrast scheme   {:?}", get_high_contrast_scheme());

    let (tx, rx) = crossbeam_channel::unbounded();
    let _listener = match listen_settings_events(tx) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("could not start the settings listener: {:?}", e);
            std::process::exit(1);
        }
    };
    println!("listening for settings changes, ctrl-c to quit");
    for event in rx {
        println!("{:?}", event);
    }
}

#[cfg(not(target_os = "windows"))]
fn main() {
    eprintln!("the ViewManagement runtime classes only exist on Windows");
}
