use anyhow::Result;
use chatnorm::Normalizer;
use clap::Args;

#[derive(Args)]
pub struct MediaTypesArgs {}

impl MediaTypesArgs {
    pub fn run(self) -> Result<()> {
        let normalizer = Normalizer::new();
        for code in normalizer.resolver().type_codes() {
            println!("{code}");
        }
        Ok(())
    }
}
