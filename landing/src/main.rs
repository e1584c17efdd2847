// Nova Vista Education website, Leptos 0.8 CSR
// Built by the Nova Vista Web Team

#[cfg(target_arch = "wasm32")]
fn main() {
    nova_vista_landing::start();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "nova-vista-landing runs in the browser: build it for wasm32-unknown-unknown with `trunk serve` from landing/"
    );
}
