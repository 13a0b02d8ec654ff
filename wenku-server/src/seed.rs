//! Sample poems and character etymology entries for a fresh install
//!
//! [`SeedPolicy::Append`] inserts every sample on each run, so repeated runs
//! duplicate rows. [`SeedPolicy::SkipExisting`] checks each sample first.

use serde::Serialize;

use crate::models::{NewCharacterEtymology, NewPoem};
use crate::store::{ContentStore, Result};

/// How to treat samples that are already present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Insert every sample unconditionally
    #[default]
    Append,
    /// Skip poems matching title+author and characters matching the glyph
    SkipExisting,
}

/// Number of rows each seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedReport {
    pub poems: usize,
    pub characters: usize,
}

struct SamplePoem {
    title: &'static str,
    author: &'static str,
    dynasty: &'static str,
    content: &'static str,
    tags: &'static str,
}

struct SampleCharacter {
    character: &'static str,
    pinyin: &'static str,
    radical: &'static str,
    stroke_count: i32,
    etymology: &'static str,
    ancient_forms: &'static str,
    meaning: &'static str,
    extended_meanings: &'static str,
    examples: &'static str,
    stroke_order: &'static str,
    dictionary_source: &'static str,
}

const SAMPLE_POEMS: &[SamplePoem] = &[
    SamplePoem {
        title: "静夜思",
        author: "李白",
        dynasty: "唐",
        content: "床前明月光，疑是地上霜。举头望明月，低头思故乡。",
        tags: "思乡,月亮",
    },
    SamplePoem {
        title: "春晓",
        author: "孟浩然",
        dynasty: "唐",
        content: "春眠不觉晓，处处闻啼鸟。夜来风雨声，花落知多少。",
        tags: "春天,自然",
    },
];

const SAMPLE_CHARACTERS: &[SampleCharacter] = &[
    SampleCharacter {
        character: "爱",
        pinyin: "ài",
        radical: "爪",
        stroke_count: 10,
        etymology: "爱字从爪从心，表示用心去抓取、呵护。古文字中，爪表示手，心表示情感，合起来表示用心去关爱。",
        ancient_forms: "甲骨文：𢆶 金文：愛 小篆：愛",
        meaning: "喜爱、关爱",
        extended_meanings: "爱护、爱惜、爱慕",
        examples: "爱心、爱情、爱国",
        stroke_order: "撇、点、点、撇、点、横钩、竖、横折、横、横",
        dictionary_source: "说文解字、康熙字典",
    },
    SampleCharacter {
        character: "国",
        pinyin: "guó",
        radical: "囗",
        stroke_count: 8,
        etymology: "国字从囗从玉，表示有城墙包围的珍宝之地。囗表示城墙，玉表示珍贵之物，合起来表示国家。",
        ancient_forms: "甲骨文：囗 金文：國 小篆：國",
        meaning: "国家、邦国",
        extended_meanings: "国度、国土、国人",
        examples: "国家、国际、祖国",
        stroke_order: "竖、横折、横、横、竖、横折、横、横",
        dictionary_source: "说文解字、康熙字典",
    },
    SampleCharacter {
        character: "学",
        pinyin: "xué",
        radical: "子",
        stroke_count: 8,
        etymology: "学字从爻从子，表示孩子在模仿学习。爻表示交错变化，子表示孩子，合起来表示孩子通过模仿来学习。",
        ancient_forms: "甲骨文：𡥼 金文：學 小篆：學",
        meaning: "学习、模仿",
        extended_meanings: "学问、学校、学问",
        examples: "学习、学校、学问",
        stroke_order: "点、点、撇、点、撇、横钩、竖、横",
        dictionary_source: "说文解字、康熙字典",
    },
];

impl SamplePoem {
    fn to_new(&self) -> NewPoem {
        NewPoem {
            title: self.title.to_owned(),
            author: self.author.to_owned(),
            dynasty: self.dynasty.to_owned(),
            content: self.content.to_owned(),
            tags: self.tags.to_owned(),
        }
    }
}

impl SampleCharacter {
    fn to_new(&self) -> NewCharacterEtymology {
        NewCharacterEtymology {
            character: self.character.to_owned(),
            pinyin: self.pinyin.to_owned(),
            radical: self.radical.to_owned(),
            stroke_count: self.stroke_count,
            etymology: self.etymology.to_owned(),
            ancient_forms: self.ancient_forms.to_owned(),
            meaning: self.meaning.to_owned(),
            extended_meanings: self.extended_meanings.to_owned(),
            examples: self.examples.to_owned(),
            stroke_order: self.stroke_order.to_owned(),
            dictionary_source: self.dictionary_source.to_owned(),
        }
    }
}

/// Insert the sample poems and characters.
pub async fn seed_samples(store: &dyn ContentStore, policy: SeedPolicy) -> Result<SeedReport> {
    let mut report = SeedReport::default();

    for sample in SAMPLE_POEMS {
        if policy == SeedPolicy::SkipExisting {
            let existing = store.search_poems_by_author(sample.author).await?;
            if existing
                .iter()
                .any(|p| p.title == sample.title && p.author == sample.author)
            {
                tracing::debug!(title = sample.title, "sample poem already present");
                continue;
            }
        }
        store.insert_poem(&sample.to_new()).await?;
        report.poems += 1;
    }

    for sample in SAMPLE_CHARACTERS {
        if policy == SeedPolicy::SkipExisting
            && store
                .find_etymology_by_character(sample.character)
                .await?
                .is_some()
        {
            tracing::debug!(character = sample.character, "sample character already present");
            continue;
        }
        store.insert_etymology(&sample.to_new()).await?;
        report.characters += 1;
    }

    tracing::info!(
        poems = report.poems,
        characters = report.characters,
        ?policy,
        "sample data seeded"
    );
    Ok(report)
}
