mod application;
mod presentation;

use playlog_core::error::Result;

fn main() -> Result<()> {
    application::run()
}
