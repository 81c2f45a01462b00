//! 开放题情感判定
//!
//! 基于关键词的简单规则，历史报表依赖这套规则做横向对比，不要替换成其他模型。

use crate::models::surveys::responses::{SentimentLabel, SentimentSummary};

const POSITIVE_KEYWORDS: [&str; 8] = [
    "iyi",
    "güzel",
    "memnun",
    "başarılı",
    "harika",
    "excellent",
    "good",
    "great",
];

const NEGATIVE_KEYWORDS: [&str; 7] = [
    "kötü",
    "berbat",
    "memnun değil",
    "başarısız",
    "poor",
    "bad",
    "terrible",
];

/// 判定单条答案的倾向
///
/// 只含正向词为正向，只含负向词为负向，两者都有或都没有为中性。
pub fn classify(text: &str) -> SentimentLabel {
    let lower = text.to_lowercase();
    let has_positive = POSITIVE_KEYWORDS.iter().any(|kw| lower.contains(kw));
    let has_negative = NEGATIVE_KEYWORDS.iter().any(|kw| lower.contains(kw));

    match (has_positive, has_negative) {
        (true, false) => SentimentLabel::Positive,
        (false, true) => SentimentLabel::Negative,
        _ => SentimentLabel::Neutral,
    }
}

/// 汇总一组答案的情感分布
pub fn analyze_sentiment<I, S>(answers: I) -> SentimentSummary
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let (mut positive, mut negative, mut neutral) = (0i64, 0i64, 0i64);

    for answer in answers {
        match classify(answer.as_ref()) {
            SentimentLabel::Positive => positive += 1,
            SentimentLabel::Negative => negative += 1,
            SentimentLabel::Neutral => neutral += 1,
        }
    }

    let overall = if positive > negative {
        SentimentLabel::Positive
    } else if negative > positive {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    SentimentSummary {
        positive,
        negative,
        neutral,
        overall,
    }
}
