//! Browser entry point. Mounts the root component onto `<body>`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(eventajob::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {
    eprintln!("build with --features csr and serve via trunk");
}
