//! Literal region → ARN data for each published listing.
//!
//! Values are taken verbatim from the marketplace listings, including the
//! us-east-2 entry of the drug NER package that points at the us-east-1
//! listing.

use super::ArnTable;

/// Drug name NER model package
pub static DRUG_NER: ArnTable = ArnTable::new(
    "drug-ner",
    &[
        ("ap-south-1", "arn:aws:sagemaker:ap-south-1:077584701553:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("ap-northeast-2", "arn:aws:sagemaker:ap-northeast-2:745090734665:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("ap-southeast-1", "arn:aws:sagemaker:ap-southeast-1:192199979996:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("ap-southeast-2", "arn:aws:sagemaker:ap-southeast-2:666831318237:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("ap-northeast-1", "arn:aws:sagemaker:ap-northeast-1:977537786026:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("ca-central-1", "arn:aws:sagemaker:ca-central-1:470592106596:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("eu-central-1", "arn:aws:sagemaker:eu-central-1:446921602837:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("eu-west-1", "arn:aws:sagemaker:eu-west-1:985815980388:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("eu-west-2", "arn:aws:sagemaker:eu-west-2:856760150666:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("us-east-1", "arn:aws:sagemaker:us-east-1:865070037744:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("us-east-2", "arn:aws:sagemaker:us-east-1:865070037744:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("us-west-1", "arn:aws:sagemaker:us-west-1:382657785993:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("us-west-2", "arn:aws:sagemaker:us-west-2:594846645681:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("eu-west-3", "arn:aws:sagemaker:eu-west-3:843114510376:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("sa-east-1", "arn:aws:sagemaker:sa-east-1:270155090741:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
        ("eu-north-1", "arn:aws:sagemaker:eu-north-1:136758871317:model-package/ner-drugs-2019-11-22-20-00-09--099d95f005ca88538569ac533b125d18"),
    ],
);

/// Job title NER model package
pub static JOB_TITLE_NER: ArnTable = ArnTable::new(
    "job-title-ner",
    &[
        ("ap-south-1", "arn:aws:sagemaker:ap-south-1:077584701553:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("ap-northeast-2", "arn:aws:sagemaker:ap-northeast-2:745090734665:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("ap-southeast-1", "arn:aws:sagemaker:ap-southeast-1:192199979996:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("ap-southeast-2", "arn:aws:sagemaker:ap-southeast-2:666831318237:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("ap-northeast-1", "arn:aws:sagemaker:ap-northeast-1:977537786026:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("ca-central-1", "arn:aws:sagemaker:ca-central-1:470592106596:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("eu-central-1", "arn:aws:sagemaker:eu-central-1:446921602837:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("eu-west-1", "arn:aws:sagemaker:eu-west-1:985815980388:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("eu-west-2", "arn:aws:sagemaker:eu-west-2:856760150666:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("us-east-1", "arn:aws:sagemaker:us-east-1:865070037744:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("us-east-2", "arn:aws:sagemaker:us-east-2:057799348421:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("us-west-1", "arn:aws:sagemaker:us-west-1:382657785993:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("us-west-2", "arn:aws:sagemaker:us-west-2:594846645681:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("eu-west-3", "arn:aws:sagemaker:eu-west-3:843114510376:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("sa-east-1", "arn:aws:sagemaker:sa-east-1:270155090741:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
        ("eu-north-1", "arn:aws:sagemaker:eu-north-1:136758871317:model-package/ner-job-title-2020-01-30-16-40-7b858b97dfef865ed8b4c6a79d4bb4df"),
    ],
);

/// Credit card transaction NER model package
pub static TRANSACTION_DATA_NER: ArnTable = ArnTable::new(
    "transaction-data-ner",
    &[
        ("ap-south-1", "arn:aws:sagemaker:ap-south-1:077584701553:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("ap-northeast-2", "arn:aws:sagemaker:ap-northeast-2:745090734665:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("ap-southeast-1", "arn:aws:sagemaker:ap-southeast-1:192199979996:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("ap-southeast-2", "arn:aws:sagemaker:ap-southeast-2:666831318237:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("ap-northeast-1", "arn:aws:sagemaker:ap-northeast-1:977537786026:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("ca-central-1", "arn:aws:sagemaker:ca-central-1:470592106596:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("eu-central-1", "arn:aws:sagemaker:eu-central-1:446921602837:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("eu-west-1", "arn:aws:sagemaker:eu-west-1:985815980388:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("eu-west-2", "arn:aws:sagemaker:eu-west-2:856760150666:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("us-east-1", "arn:aws:sagemaker:us-east-1:865070037744:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("us-east-2", "arn:aws:sagemaker:us-east-2:057799348421:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("us-west-1", "arn:aws:sagemaker:us-west-1:382657785993:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("us-west-2", "arn:aws:sagemaker:us-west-2:594846645681:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("eu-west-3", "arn:aws:sagemaker:eu-west-3:843114510376:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("sa-east-1", "arn:aws:sagemaker:sa-east-1:270155090741:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
        ("eu-north-1", "arn:aws:sagemaker:eu-north-1:136758871317:model-package/ner-cc-txns-2019-11-22-14-58-3-2b31862c2ac0032199486bf61554cea0"),
    ],
);

/// Video game title NER model package
pub static VIDEO_GAMES_NER: ArnTable = ArnTable::new(
    "video-games-ner",
    &[
        ("ap-south-1", "arn:aws:sagemaker:ap-south-1:077584701553:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("ap-northeast-2", "arn:aws:sagemaker:ap-northeast-2:745090734665:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("ap-southeast-1", "arn:aws:sagemaker:ap-southeast-1:192199979996:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("ap-southeast-2", "arn:aws:sagemaker:ap-southeast-2:666831318237:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("ap-northeast-1", "arn:aws:sagemaker:ap-northeast-1:977537786026:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("ca-central-1", "arn:aws:sagemaker:ca-central-1:470592106596:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("eu-central-1", "arn:aws:sagemaker:eu-central-1:446921602837:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("eu-west-1", "arn:aws:sagemaker:eu-west-1:985815980388:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("eu-west-2", "arn:aws:sagemaker:eu-west-2:856760150666:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("us-east-1", "arn:aws:sagemaker:us-east-1:865070037744:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("us-east-2", "arn:aws:sagemaker:us-east-2:057799348421:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("us-west-1", "arn:aws:sagemaker:us-west-1:382657785993:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("us-west-2", "arn:aws:sagemaker:us-west-2:594846645681:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("eu-west-3", "arn:aws:sagemaker:eu-west-3:843114510376:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("sa-east-1", "arn:aws:sagemaker:sa-east-1:270155090741:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
        ("eu-north-1", "arn:aws:sagemaker:eu-north-1:136758871317:model-package/ner-video-games-2019-08-23-21--71034d7ffea420c9de1916dd0af0a1f5"),
    ],
);

/// Stopword removal algorithm, published in a single region
pub static STOPWORD_ALGORITHM: ArnTable = ArnTable::new(
    "stopword-algorithm",
    &[
        ("us-east-2", "arn:aws:sagemaker:us-east-2:084888172679:algorithm/stopword-2020-02-13-2"),
    ],
);
