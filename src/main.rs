use sabji_journey::JourneyApp;
use sabji_journey::data::read_levels_embedded;

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Journey to Sabji")
            .with_inner_size([960.0, 820.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Journey to Sabji",
        options,
        Box::new(|_cc| {
            let bank = read_levels_embedded().inspect_err(|e| log::error!("{e}"))?;
            Ok(Box::new(JourneyApp::new(bank)))
        }),
    )
}

#[cfg(target_arch = "wasm32")]
fn main() {
    use eframe::wasm_bindgen::JsCast as _;

    eframe::WebLogger::init(log::LevelFilter::Debug).ok();
    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("no hay window/document");
            return;
        };
        let Some(canvas) = document
            .get_element_by_id("the_canvas_id")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("no se encontró el canvas #the_canvas_id");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| {
                    let bank = read_levels_embedded().inspect_err(|e| log::error!("{e}"))?;
                    Ok(Box::new(JourneyApp::new(bank)))
                }),
            )
            .await;

        if let Err(e) = start_result {
            log::error!("no se pudo arrancar eframe: {e:?}");
        }
    });
}
