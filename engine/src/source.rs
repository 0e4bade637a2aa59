//! Where results come from.
//!
//! Only the mock source exists. It ignores the query and always returns the
//! same three records; a real search backend would implement
//! [`OpportunitySource`] and replace it.

use finder_types::{Metrics, Opportunity, OpportunityId};

pub trait OpportunitySource: Send + Sync {
    fn opportunities(&self, query: &str) -> Vec<Opportunity>;
}

struct MockRecord {
    id: u32,
    problem: &'static str,
    solution: &'static str,
    tags: &'static [&'static str],
    upvotes: u32,
    comments: u32,
    relevance: f32,
}

const MOCK_RECORDS: &[MockRecord] = &[
    MockRecord {
        id: 1,
        problem: "Long wait times for specialist appointments",
        solution: "An AI-powered scheduling platform that dynamically allocates slots and matches patients with available doctors.",
        tags: &["B2B", "Healthcare", "Medium investment"],
        upvotes: 156,
        comments: 23,
        relevance: 0.89,
    },
    MockRecord {
        id: 2,
        problem: "Difficulty tracking medication adherence for elderly patients",
        solution: "A smart pill dispenser with mobile app integration that sends reminders and tracks medication compliance.",
        tags: &["B2C", "Healthcare", "Hardware"],
        upvotes: 89,
        comments: 15,
        relevance: 0.82,
    },
    MockRecord {
        id: 3,
        problem: "Medical records are scattered across different systems",
        solution: "A unified patient data platform that aggregates medical records from multiple providers with blockchain security.",
        tags: &["B2B", "Healthcare", "High investment"],
        upvotes: 203,
        comments: 41,
        relevance: 0.91,
    },
];

impl MockRecord {
    fn to_opportunity(&self) -> Opportunity {
        Opportunity {
            id: OpportunityId::new(self.id),
            problem: self.problem.to_string(),
            solution: self.solution.to_string(),
            tags: self.tags.iter().map(|tag| (*tag).to_string()).collect(),
            metrics: Metrics {
                upvotes: self.upvotes,
                comments: self.comments,
                relevance: self.relevance,
            },
        }
    }
}

/// Fixed demo dataset.
#[derive(Debug, Default, Clone, Copy)]
pub struct MockOpportunities;

impl OpportunitySource for MockOpportunities {
    fn opportunities(&self, _query: &str) -> Vec<Opportunity> {
        MOCK_RECORDS.iter().map(MockRecord::to_opportunity).collect()
    }
}
