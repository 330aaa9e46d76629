use serde::Serialize;

/// Everything the narrative generator can produce for one respondent.
/// Sections a tier is not entitled to are `None` and omitted from the
/// serialized payload entirely, so free responses cannot leak premium
/// content even by shape inspection.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DetailedAnalysis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_insights: Option<PersonalityInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_matches: Option<CareerMatchReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_roadmaps: Option<Vec<CareerRoadmap>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub development_areas: Option<Vec<DevelopmentArea>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub market_insights: Option<MarketInsights>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personality_profile: Option<PersonalityProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub networking_strategy: Option<NetworkingStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_mentor: Option<MentorProgram>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_prep: Option<InterviewPrep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_blueprint: Option<SuccessBlueprint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityInsights {
    pub headline: String,
    pub observations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatch {
    pub title: &'static str,
    pub match_score: u8,
    pub description: &'static str,
    pub skills: Vec<&'static str>,
    pub growth_outlook: &'static str,
    pub salary_range: &'static str,
}

/// Career fits split into tiers by match score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerMatchReport {
    pub high_fit: Vec<CareerMatch>,
    pub medium_fit: Vec<CareerMatch>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadmapPhase {
    pub name: &'static str,
    pub duration: &'static str,
    pub activities: Vec<&'static str>,
    pub skills: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerRoadmap {
    pub title: &'static str,
    pub phases: Vec<RoadmapPhase>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DevelopmentPriority {
    High,
    Medium,
}

impl DevelopmentPriority {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
        }
    }
}

/// One pillar's growth gap on a 0-10 scale.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DevelopmentArea {
    pub area: &'static str,
    pub current_level: u8,
    pub target_level: u8,
    pub priority: DevelopmentPriority,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketInsights {
    pub industry_trends: Vec<&'static str>,
    pub emerging_roles: Vec<&'static str>,
    pub in_demand_skills: Vec<&'static str>,
    pub salary_trend: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalityProfile {
    pub cognitive_style: &'static str,
    pub work_style: &'static str,
    pub communication_style: &'static str,
    pub decision_making: &'static str,
    pub stress_management: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkingContact {
    pub role: &'static str,
    pub platform: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkingStrategy {
    pub target_industries: Vec<&'static str>,
    pub key_contacts: Vec<NetworkingContact>,
    pub event_types: Vec<&'static str>,
    pub online_communities: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorGoal {
    pub objective: &'static str,
    pub actions: Vec<&'static str>,
    pub success_metrics: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MentorProgram {
    pub weekly_reflections: Vec<&'static str>,
    pub monthly_goals: Vec<MentorGoal>,
    pub personalized_tips: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InterviewPrep {
    pub common_questions: Vec<&'static str>,
    pub archetype_questions: Vec<&'static str>,
    pub preparation_checklist: Vec<&'static str>,
    pub follow_up_checklist: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlueprintPhase {
    pub window: &'static str,
    pub focus: &'static str,
    pub activities: Vec<&'static str>,
    pub milestones: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifeBalanceEntry {
    pub dimension: &'static str,
    pub rating: u8,
}

/// Ninety-day plan: three thirty-day phases plus supporting practices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuccessBlueprint {
    pub phases: Vec<BlueprintPhase>,
    pub habit_tracker: Vec<&'static str>,
    pub confidence_exercises: Vec<&'static str>,
    pub life_balance: Vec<LifeBalanceEntry>,
}
