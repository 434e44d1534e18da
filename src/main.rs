use ancient_tech_site::Landing;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Starting Ancient Tech Decoded");
    yew::Renderer::<Landing>::new().render();
}
