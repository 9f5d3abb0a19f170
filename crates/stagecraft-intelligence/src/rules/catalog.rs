// ABOUTME: The built-in static rule table for onboarding-level advice
// ABOUTME: Predicates read only crowd size, frequency, experience, and marketing facts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stagecraft Contributors

use stagecraft_core::constants::marketing;
use stagecraft_core::models::PerformanceFrequency;

use super::StaticRule;
use crate::recommendation::{RecommendationCategory, RecommendationPriority};
use crate::tags::RelevanceTags;

/// Experience below which a musician is still building fundamentals
const NOVICE_YEARS: f64 = 2.0;

/// Experience after which a web presence is expected
const WEBSITE_YEARS: f64 = 3.0;

/// Experience after which teaching and advanced study make sense
const SEASONED_YEARS: f64 = 5.0;

/// Crowd-size codes: 2 is 10-50, 3 is 50-100, 4 is 100-500
const SMALL_CROWD_MAX: u8 = 2;
const MAILING_LIST_CROWD_MIN: u8 = 3;
const LARGE_CROWD_MIN: u8 = 4;

pub(super) fn basic_rules() -> Vec<StaticRule> {
    use RecommendationCategory::{Marketing, Networking, Performance, Skill};
    use RecommendationPriority::{High, Low, Medium};

    vec![
        StaticRule {
            id: "MKT_01",
            title: "Start a social media presence",
            description: "Post short practice clips and show announcements each week. \
                          Tag them #{instrument}player so local fans and bookers can find you.",
            category: Marketing,
            priority: High,
            tags: RelevanceTags::empty(),
            predicate: |f| f.no_marketing,
        },
        StaticRule {
            id: "PERF_01",
            title: "Book your first regular gigs",
            description: "You have the experience to play out. Start with open mics and \
                          coffee shops to get comfortable performing {instrument} live.",
            category: Performance,
            priority: High,
            tags: RelevanceTags::PERFORMANCE_INTENSIVE.union(RelevanceTags::FOUNDATIONAL),
            predicate: |f| f.frequency.is_low() && f.years >= NOVICE_YEARS,
        },
        StaticRule {
            id: "SKILL_01",
            title: "Build a daily practice routine",
            description: "Set aside focused {instrument} practice time every day: scales, \
                          technique, and one song you are learning.",
            category: Skill,
            priority: High,
            tags: RelevanceTags::SKILL_INTENSIVE.union(RelevanceTags::FOUNDATIONAL),
            predicate: |f| f.years < NOVICE_YEARS,
        },
        StaticRule {
            id: "NET_01",
            title: "Connect with local musicians",
            description: "Go to jam sessions and shows in your scene. Other players are \
                          the fastest route to gigs and collaborators.",
            category: Networking,
            priority: Medium,
            tags: RelevanceTags::empty(),
            predicate: |f| !f.uses(marketing::NETWORKING),
        },
        StaticRule {
            id: "PERF_02",
            title: "Move from monthly to weekly shows",
            description: "A standing weekly slot at one venue builds a following faster \
                          than scattered monthly dates.",
            category: Performance,
            priority: Medium,
            tags: RelevanceTags::PERFORMANCE_INTENSIVE,
            predicate: |f| f.frequency == PerformanceFrequency::Monthly,
        },
        StaticRule {
            id: "PERF_03",
            title: "Turn regular gigs into bigger crowds",
            description: "You play often but to small rooms. Announce every show, invite \
                          people personally, and ask venues to list you.",
            category: Marketing,
            priority: Medium,
            tags: RelevanceTags::PERFORMANCE_INTENSIVE,
            predicate: |f| f.frequency.is_regular() && f.crowd_code <= SMALL_CROWD_MAX,
        },
        StaticRule {
            id: "MKT_02",
            title: "Start a mailing list",
            description: "Your crowds are big enough to capture. Put a signup sheet or QR \
                          code at the merch table and email fans before every show.",
            category: Marketing,
            priority: Medium,
            tags: RelevanceTags::empty(),
            predicate: |f| !f.uses(marketing::MAILING) && f.crowd_code >= MAILING_LIST_CROWD_MIN,
        },
        StaticRule {
            id: "MKT_03",
            title: "Put up a simple website",
            description: "One page with your bio, {instrument} clips, upcoming dates, and a \
                          booking contact makes you easy to hire.",
            category: Marketing,
            priority: Low,
            tags: RelevanceTags::empty(),
            predicate: |f| !f.uses(marketing::WEBSITE) && f.years >= WEBSITE_YEARS,
        },
        StaticRule {
            id: "SKILL_02",
            title: "Teach or study at an advanced level",
            description: "Taking on students or a masterclass sharpens your own \
                          {instrument} playing and adds income.",
            category: Skill,
            priority: Medium,
            tags: RelevanceTags::SKILL_INTENSIVE,
            predicate: |f| f.years >= SEASONED_YEARS,
        },
        StaticRule {
            id: "NET_02",
            title: "Meet promoters and bookers",
            description: "Your draw is worth something. Introduce yourself to promoters \
                          and festival bookers with attendance numbers in hand.",
            category: Networking,
            priority: Medium,
            tags: RelevanceTags::empty(),
            predicate: |f| f.frequency.is_regular() && f.crowd_code >= LARGE_CROWD_MIN,
        },
        StaticRule {
            id: "MKT_04",
            title: "Use social media to fill gaps between shows",
            description: "You post but rarely play. Share rehearsal footage and covers so \
                          followers stay engaged until your next date.",
            category: Marketing,
            priority: Low,
            tags: RelevanceTags::empty(),
            predicate: |f| f.uses(marketing::SOCIAL) && !f.frequency.is_regular(),
        },
        StaticRule {
            id: "PERF_04",
            title: "Pitch larger venues",
            description: "With your experience and crowd size, approach concert halls and \
                          festival stages for support or headline slots.",
            category: Performance,
            priority: Low,
            tags: RelevanceTags::PERFORMANCE_INTENSIVE,
            predicate: |f| f.crowd_code >= LARGE_CROWD_MIN && f.years >= SEASONED_YEARS,
        },
    ]
}

pub(super) fn fallback_rule() -> StaticRule {
    StaticRule {
        id: "GEN_01",
        title: "Log your activity to unlock personalized advice",
        description: "Record your shows, practice sessions, and goals. The more history \
                      you log, the more specific your {instrument} recommendations become.",
        category: RecommendationCategory::Skill,
        priority: RecommendationPriority::Low,
        tags: RelevanceTags::empty(),
        predicate: |_| true,
    }
}
