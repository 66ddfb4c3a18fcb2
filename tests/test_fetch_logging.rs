use log::{Level, LevelFilter, Log, Metadata, Record};
use recipe2pdf::fetchers::RequestFetcher;
use std::sync::Mutex;

struct CaptureLogger {
    lines: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn test_non_success_status_is_logged_and_body_returned() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut server = mockito::Server::new();
    let _m = server
        .mock("GET", "/recipe")
        .with_status(500)
        .with_body("Internal Server Error")
        .create();

    let url = format!("{}/recipe", server.url());
    let fetcher = RequestFetcher::new().unwrap();
    let body = fetcher.fetch(&url).unwrap();

    assert_eq!(body, "Internal Server Error");

    let lines = LOGGER.lines.lock().unwrap();
    assert!(
        lines.iter().any(|(level, line)| *level == Level::Warn
            && line.contains(&url)
            && line.contains("Internal Server Error")),
        "no warning mentioning {url} in {lines:?}"
    );
}
