use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::marketplace::{
    ArnTable, DRUG_NER, JOB_TITLE_NER, STOPWORD_ALGORITHM, TRANSACTION_DATA_NER, VIDEO_GAMES_NER,
};

/// Published marketplace listings with a region → ARN table
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Resource {
    DrugNer,
    JobTitleNer,
    TransactionDataNer,
    VideoGamesNer,
    StopwordAlgorithm,
}

impl Resource {
    fn table(self) -> &'static ArnTable {
        match self {
            Resource::DrugNer => &DRUG_NER,
            Resource::JobTitleNer => &JOB_TITLE_NER,
            Resource::TransactionDataNer => &TRANSACTION_DATA_NER,
            Resource::VideoGamesNer => &VIDEO_GAMES_NER,
            Resource::StopwordAlgorithm => &STOPWORD_ALGORITHM,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ArnCommand {
    #[arg(value_enum, help = "Published marketplace resource")]
    pub resource: Resource,

    #[arg(help = "AWS region code, e.g. us-east-1")]
    pub region: String,
}

impl ArnCommand {
    pub fn execute(self) -> Result<()> {
        let arn = self.resource.table().get(&self.region)?;
        println!("{arn}");
        Ok(())
    }
}
