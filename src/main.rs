//! Heartburst - an animated favorite button
//! Built with iced; a small host window shows the heart and its state

mod app;
mod features;
mod ui;

fn main() -> iced::Result {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    iced::application(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .window_size((420.0, 560.0))
        .antialiasing(true)
        .run()
}
