use floodgate::error::AppResult;

fn main() -> AppResult<()> {
    floodgate::run()
}
