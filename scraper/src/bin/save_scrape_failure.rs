use anyhow::{Context, Result};
use apod_scraper::config::{DEFAULT_IMAGE_BASE_URL, DEFAULT_PAGE_BASE_URL};
use apod_scraper::{build_client, fetch_html, parse_apod_page, ApodError, Config, DateStamp};
use scraper::{Html, Selector};
use std::env;
use std::fs;
use std::path::Path;

fn has_element(document: &Html, selector: &str) -> bool {
    let selector = Selector::parse(selector).unwrap();
    document.select(&selector).next().is_some()
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Please provide a date and a test name");
        eprintln!("Usage: cargo run --bin save_scrape_failure <YYMMDD> <test_name>");
        std::process::exit(1);
    }

    let stamp = DateStamp::parse(&args[1])?;
    let test_name = &args[2];
    let url = stamp.page_url(DEFAULT_PAGE_BASE_URL);

    println!("Fetching HTML from {}...", url);

    let client = build_client(Config::default().timeout)?;
    let html = fetch_html(&client, &url).context("Failed to fetch page")?;

    // Create failures directory if it doesn't exist
    let failures_dir = Path::new("src/tests/fixtures/failures");
    fs::create_dir_all(failures_dir).context("Failed to create failures directory")?;

    // Save the HTML for testing
    let file_path = failures_dir.join(format!("{}.html", test_name));
    fs::write(&file_path, &html).context("Failed to write HTML file")?;

    println!(
        "Saved HTML to {} for regression testing",
        file_path.display()
    );

    let document = Html::parse_document(&html);
    let has_image = has_element(&document, "img");
    let has_caption = has_element(&document, "b");
    let has_video = has_element(&document, "iframe") || has_element(&document, "video");
    let has_audio = has_element(&document, "audio");

    println!("HTML analysis results:");
    println!("  - Has image: {}", has_image);
    println!("  - Has bold caption: {}", has_caption);
    println!("  - Has video embed: {}", has_video);
    println!("  - Has audio embed: {}", has_audio);

    match parse_apod_page(&html, DEFAULT_IMAGE_BASE_URL) {
        Ok(entry) => {
            println!("⚠️ Parse succeeded! This may not be a failure case.");
            let json = serde_json::to_string_pretty(&entry)
                .context("Failed to serialize parsed entry")?;
            println!("{}", json);
        }
        Err(ApodError::NotFound) if has_video || has_audio => {
            println!("✅ No image on this page, it embeds other media instead.");
        }
        Err(e) => {
            println!("✅ Parse failed with error: {}", e);
            println!("\nThis test case has been saved and will be included in regression tests.");
        }
    }

    Ok(())
}
