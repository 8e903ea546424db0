fn main() {
    recipe_scraper::cli::run();
}
