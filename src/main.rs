#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use motion_portfolio::content::SiteContent;

    eprintln!("This project is frontend-only. Run `trunk serve` or `trunk build --release`.");

    match SiteContent::bundled() {
        Ok(content) => eprintln!(
            "Bundled content: {} projects, {} skills.",
            content.projects.len(),
            content.skills.len()
        ),
        Err(error) => {
            eprintln!("Bundled content is invalid: {error}");
            std::process::exit(1);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    motion_portfolio::frontend::run();
}
