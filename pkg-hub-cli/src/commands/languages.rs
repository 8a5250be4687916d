use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use pkg_hub_catalog::Language;

pub(crate) fn run_languages() {
    log::info!("Supported languages:");
    crate::log_blank();

    for language in Language::all() {
        log::info!(
            "  {} [{}]",
            language
                .as_str()
                .if_supports_color(Stdout, |t| t.bold()),
            language
                .display_name()
                .if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Aliases: {}", language.aliases().join(", "));
    }
}
