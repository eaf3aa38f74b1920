use lo_search_client::{CatalogClient, FilterCategory, MemoryStore, PageHint, SearchQuery};
use std::sync::Arc;
use strum::IntoEnumIterator;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let api_key = match std::env::var("LO_API_KEY") {
        Ok(key) => key,
        Err(_) => {
            eprintln!("Set LO_API_KEY to run this example against the live catalog.");
            return Ok(());
        }
    };

    let store = Arc::new(MemoryStore::new());
    let client = CatalogClient::new(api_key, "en").with_store(store);

    println!("1) Fetching filter lists (first lookup hits the API)...");
    for category in FilterCategory::iter() {
        let placeholder = match category {
            FilterCategory::Language => "Default language",
            _ => "All",
        };
        let options = client.filter_options_labeled(category, placeholder).await?;
        println!("   {}: {} options", category, options.len());
    }

    println!("2) Same lookups again (served from the store, relabeled again)...");
    for category in FilterCategory::iter() {
        let placeholder = match category {
            FilterCategory::Language => "Default language",
            _ => "All",
        };
        let options = client.filter_options_labeled(category, placeholder).await?;
        println!("   {}: {} options, first label {:?}", category, options.len(), options[0].label());
    }

    println!("3) Searching for 'carpenter'...");
    let query = SearchQuery::new("carpenter", 1).with_language("en");
    let results = client.search(&query).await?;
    for summary in &results {
        println!("   {} — {}", summary.title(), summary.detail_url());
    }
    println!("   page hint: {:?}", PageHint::from_page(query.page(), results.len()));

    Ok(())
}
