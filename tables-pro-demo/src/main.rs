mod server;

use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use tables_pro::prelude::*;
use tables_pro::testing::{RecordingNavigator, RecordingRemote};

use server::MovieServer;

/// Answer every outstanding request, including ones issued while applying
/// earlier responses.
fn pump(page: &mut Page, remote: &RecordingRemote, server: &mut MovieServer) {
    loop {
        let requests = remote.take();
        if requests.is_empty() {
            return;
        }
        for request in requests {
            page.apply_response(server.respond(request));
        }
    }
}

fn show(step: &str, page: &Page, navigator: &RecordingNavigator) {
    let config = page.config();
    let count = page
        .doc()
        .get(&config.count_id)
        .and_then(|el| el.text_content())
        .unwrap_or("-");
    println!("{step}");
    println!("  phase:     {:?}", page.phase());
    println!("  selection: {:?} (count {count})", page.selection_state());
    if let Some(cell) = page.edit().requested() {
        println!("  editing:   {cell}");
    }
    for action in navigator.take() {
        println!("  browser:   {action:?}");
    }
}

fn run() -> Result<(), Error> {
    let config = PageConfig::default();
    let mut server = MovieServer::new(config.clone());
    let remote = RecordingRemote::new();
    let navigator = RecordingNavigator::new();

    let mut page = Page::new(server.page(900), config, remote.clone(), navigator.clone());

    let outcome = page.load()?;
    show(&format!("load -> {outcome:?}"), &page, &navigator);
    pump(&mut page, &remote, &mut server);
    show("layout applied", &page, &navigator);

    page.click("cb_1", Modifiers::new());
    page.click("cb_4", Modifiers::shift());
    show("range 1..=4", &page, &navigator);

    page.click("select_all_page", Modifiers::new());
    show("select all on page", &page, &navigator);
    page.click("select_all", Modifiers::new());
    show("select all matching", &page, &navigator);
    page.click("select_all", Modifiers::new());
    show("leave all matching", &page, &navigator);

    page.click("title_2", Modifiers::new());
    pump(&mut page, &remote, &mut server);
    show("open title of movie 2", &page, &navigator);
    page.change("id_title", Some("Blade Runner (Final Cut)"))?;
    page.click("title_5", Modifiers::new());
    pump(&mut page, &remote, &mut server);
    show("commit edit", &page, &navigator);

    page.change("id_year", Some("1986"))?;
    pump(&mut page, &remote, &mut server);
    show("filter year >= 1986", &page, &navigator);

    page.change("id_per_page", Some("50"))?;
    show("per page 50", &page, &navigator);

    Ok(())
}

fn main() {
    let log_file = File::create("tables-pro-demo.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
    }
}
