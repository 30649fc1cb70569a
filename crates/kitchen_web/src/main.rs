// Trunk binary for the recipe browser. On wasm32 with `web` enabled the
// module start hook mounts the app; `main` itself has nothing to do.

fn main() {}

#[cfg(all(feature = "web", target_arch = "wasm32"))]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn wasm_start() {
    kitchen_web::start();
}
