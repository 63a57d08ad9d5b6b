// ---------------------------------------------------------------------------
// FieldSignal dataset — authored records and schemas for the catalog pages
// ---------------------------------------------------------------------------
//
// The static content each catalog page mounts: case studies, insight posts,
// downloadable resources, and the service library. Defined once, immutable at
// runtime. The "Services" industry option also matching records tagged
// "Professional Services" is a deliberate editorial synonym, declared here as
// an explicit alias so it stays reviewable.
// ---------------------------------------------------------------------------

use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::schema::FacetSchema;
use crate::types::Record;

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

pub fn case_studies() -> Result<Catalog, EngineError> {
	let schema = FacetSchema::builder()
		.category(
			"Service",
			&[
				"Readiness",
				"Enablement",
				"KnowledgeStack",
				"Agents",
				"Governance",
				"Maintenance",
				"ContentEngine",
			],
		)
		.category(
			"Industry",
			&[
				"Technology",
				"Finance",
				"Education",
				"Services",
				"Marketing",
				"Healthcare",
			],
		)
		.searchable()
		.alias("Services", "Professional Services")
		.category("Outcome", &["Speed", "Quality", "Accuracy", "Governance", "Scale"])
		.build()?;

	let records = vec![
		Record::new(
			1,
			"40% reduction in first-response time using governed knowledge foundations.",
			"Reduced response time and improved internal accuracy using a governed knowledge foundation and RAG-powered agents.",
		)
		.facet("Service", vec!["KnowledgeStack", "Agents", "Governance"])
		.facet("Industry", "Technology")
		.facet("Outcome", "Speed")
		.featured(),
		Record::new(
			2,
			"3x content velocity with a repeatable AI brand-trained system.",
			"Built a repeatable AI content system that increased output while maintaining brand control and editorial quality.",
		)
		.facet("Service", vec!["ContentEngine", "Enablement"])
		.facet("Industry", "Marketing")
		.facet("Outcome", "Scale")
		.featured(),
		Record::new(
			3,
			"Institutional KnowledgeStack turned 15 years of data into active assistants.",
			"Deployed internal agents that reduced manual work and standardized answers across faculty teams using archival data.",
		)
		.facet("Service", vec!["KnowledgeStack", "Agents"])
		.facet("Industry", "Education")
		.facet("Outcome", "Accuracy")
		.featured(),
		Record::new(
			4,
			"Established governance and guardrails so AI could scale safely across 12 departments.",
			"Created unified operating rules and permissions that allowed leadership to greenlight AI adoption at scale.",
		)
		.facet("Service", vec!["Governance", "Readiness"])
		.facet("Industry", "Finance")
		.facet("Outcome", "Governance"),
		Record::new(
			5,
			"Standardized document synthesis saving senior partners 8 hours per week.",
			"Implemented structured AI workflows for document review that improved consistency and reduced manual synthesis time.",
		)
		.facet("Service", vec!["Enablement", "Workflow"])
		.facet("Industry", "Professional Services")
		.facet("Outcome", "Speed"),
		Record::new(
			6,
			"Improved internal response quality for field workers by 25%.",
			"Built a low-latency knowledge foundation that gave field workers instant access to complex program guidelines.",
		)
		.facet("Service", vec!["KnowledgeStack", "Maintenance"])
		.facet("Industry", "Non-Profit")
		.facet("Outcome", "Quality"),
		Record::new(
			7,
			"Automated feature mapping across 400+ internal documents.",
			"Used KnowledgeStack to structure fragmented product data, enabling instant retrieval and cross-referencing.",
		)
		.facet("Service", vec!["KnowledgeStack"])
		.facet("Industry", "Technology")
		.facet("Outcome", "Accuracy"),
		Record::new(
			8,
			"Reduced vendor onboarding cycles by 5 days through automated verification.",
			"Deployed governed agents to handle routine verification tasks while maintaining strict compliance check standards.",
		)
		.facet("Service", vec!["Agents", "Governance"])
		.facet("Industry", "Logistics")
		.facet("Outcome", "Speed"),
		Record::new(
			9,
			"Cleaned and structured 10 years of policy data for secure retrieval.",
			"Transformed siloed PDF policy documents into a structured KnowledgeStack ready for governed agent deployment.",
		)
		.facet("Service", vec!["KnowledgeStack", "Readiness"])
		.facet("Industry", "Healthcare")
		.facet("Outcome", "Accuracy"),
	];

	Ok(Catalog::new(records, schema))
}

// ---------------------------------------------------------------------------
// Insights
// ---------------------------------------------------------------------------

pub fn insights() -> Result<Catalog, EngineError> {
	let schema = FacetSchema::builder()
		.category("Phase", &["Assess", "Capture", "Structure", "Deploy", "Maintain"])
		.category(
			"Topic",
			&[
				"Enablement",
				"Training",
				"KnowledgeStack",
				"Agents",
				"Governance",
				"ContentEngine",
				"AEO",
				"VisualAI",
				"AI Readiness",
				"Maintenance",
			],
		)
		.category(
			"Format",
			&["Framework", "Playbook", "Checklist", "Field Note", "Opinion"],
		)
		.build()?;

	let records = vec![
		Record::new(
			1,
			"Why Most AI Pilots Fail: The Governance Gap",
			"The governance basics every organization should set before scaling AI across teams to avoid fragmentation.",
		)
		.facet("Phase", "Assess")
		.facet("Topic", "Governance")
		.facet("Format", "Opinion")
		.featured(),
		Record::new(
			2,
			"Structuring Your First KnowledgeStack",
			"How to build a KnowledgeStack that improves accuracy and reduces risk across deployments by structuring internal data.",
		)
		.facet("Phase", "Structure")
		.facet("Topic", "KnowledgeStack")
		.facet("Format", "Framework")
		.featured(),
		Record::new(
			3,
			"Beyond the Prompt: Building Multi-Step AI Workflows",
			"A practical model for moving from basic prompting to an AI operating layer that teams actually use for complex tasks.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", "Enablement")
		.facet("Format", "Playbook")
		.featured(),
		Record::new(
			4,
			"AEO Fundamentals: Being the Answer, Not Just a Link",
			"Answer Engine Optimization fundamentals for ensuring your brand is surfaced as the definitive answer in AI discovery systems.",
		)
		.facet("Phase", "Maintain")
		.facet("Topic", "AEO")
		.facet("Format", "Field Note"),
		Record::new(
			5,
			"When to Deploy Agents (And When Not To)",
			"How to define scope and guardrails for autonomous agents while avoiding common pitfalls in task-ready assistants.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", "Agents")
		.facet("Format", "Checklist"),
		Record::new(
			6,
			"Scaling Creative Production with VisualAI",
			"How to implement scalable creative production with control, maintaining brand consistency through generative systems.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", "VisualAI")
		.facet("Format", "Framework"),
		Record::new(
			7,
			"The AI Readiness Scorecard: A Leadership Guide",
			"A structured guide for leaders to assess what is possible, what is risky, and what should be prioritized first.",
		)
		.facet("Phase", "Assess")
		.facet("Topic", "AI Readiness")
		.facet("Format", "Playbook"),
		Record::new(
			8,
			"Role-Based Training: Making AI Adoption Stick",
			"Why generic training fails and how to build role-based enablement programs that drive real behavior change.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", "Enablement")
		.facet("Format", "Framework"),
		Record::new(
			9,
			"Building the AI Maintenance Operating Model",
			"Ongoing updates, monitoring, and improvement patterns so your AI systems stay reliable and accurate over time.",
		)
		.facet("Phase", "Maintain")
		.facet("Topic", "Maintenance")
		.facet("Format", "Opinion"),
	];

	Ok(Catalog::new(records, schema))
}

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

pub fn resources() -> Result<Catalog, EngineError> {
	let schema = FacetSchema::builder()
		.category("Phase", &["Assess", "Capture", "Structure", "Deploy", "Maintain"])
		.category(
			"Format",
			&["Playbook", "Template", "Checklist", "Workshop", "Guide"],
		)
		.category(
			"Topic",
			&[
				"Readiness",
				"KnowledgeStack",
				"Agents",
				"Governance",
				"Enablement",
				"Training",
				"ContentEngine",
				"AEO",
				"VisualAI",
			],
		)
		.build()?;

	let records = vec![
		Record::new(
			1,
			"The AI Operating Layer Playbook",
			"A clear model for deploying AI as an operating layer across teams.",
		)
		.facet("Phase", vec!["Assess", "Deploy"])
		.facet("Format", "Playbook")
		.facet("Topic", "Readiness")
		.featured(),
		Record::new(
			2,
			"AI Readiness Assessment",
			"A structured assessment that highlights your strongest opportunities and key gaps.",
		)
		.facet("Phase", vec!["Assess"])
		.facet("Format", "Assessment")
		.facet("Topic", "Readiness")
		.featured(),
		Record::new(
			3,
			"KnowledgeStack Preparation Checklist",
			"A checklist to prepare internal knowledge for retrieval and accuracy.",
		)
		.facet("Phase", vec!["Capture", "Structure"])
		.facet("Format", "Checklist")
		.facet("Topic", "KnowledgeStack"),
		Record::new(
			4,
			"Governance Starter Kit",
			"A governance starter kit for responsible AI adoption and access control.",
		)
		.facet("Phase", vec!["Assess", "Deploy"])
		.facet("Format", "Guide")
		.facet("Topic", "Governance"),
		Record::new(
			5,
			"Impact & Feasibility Prioritization Matrix",
			"A structured worksheet to map use cases and prioritize by impact and feasibility.",
		)
		.facet("Phase", vec!["Assess"])
		.facet("Format", "Template")
		.facet("Topic", "Readiness"),
		Record::new(
			6,
			"AEO Page Structure Template",
			"A page template designed to capture answer intent and improve AI discovery.",
		)
		.facet("Phase", vec!["Maintain"])
		.facet("Format", "Template")
		.facet("Topic", "AEO"),
		Record::new(
			7,
			"Agent Scope Definition Worksheet",
			"Define the specific guardrails and data access for your task-ready assistants.",
		)
		.facet("Phase", vec!["Structure", "Deploy"])
		.facet("Format", "Workshop")
		.facet("Topic", "Agents"),
		Record::new(
			8,
			"AI Adoption Readiness Survey",
			"Measure team sentiment and technical comfort levels before scaling AI tools.",
		)
		.facet("Phase", vec!["Assess"])
		.facet("Format", "Guide")
		.facet("Topic", "Enablement"),
		Record::new(
			9,
			"Maintenance & Drift Monitoring Guide",
			"How to set up ongoing performance checks for your deployed agents.",
		)
		.facet("Phase", vec!["Maintain"])
		.facet("Format", "Guide")
		.facet("Topic", "Maintenance"),
	];

	Ok(Catalog::new(records, schema))
}

// ---------------------------------------------------------------------------
// Service library
// ---------------------------------------------------------------------------

pub fn services() -> Result<Catalog, EngineError> {
	let schema = FacetSchema::builder()
		.category("Phase", &["Assess", "Capture", "Structure", "Deploy", "Maintain"])
		.category(
			"Topic",
			&[
				"Enablement",
				"Training",
				"KnowledgeStack",
				"Agents",
				"Governance",
				"Maintenance",
				"ContentEngine",
				"VisualAI",
				"AEO",
			],
		)
		.build()?;

	let records = vec![
		Record::new(
			"readiness",
			"AI Readiness",
			"Assessment + leadership workshop + roadmap to move from exploration to execution.",
		)
		.facet("Phase", "Assess")
		.facet("Topic", vec!["Governance", "Enablement"]),
		Record::new(
			"enablement",
			"AI Enablement",
			"Hands-on support to embed AI into department workflows and daily operations.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["Enablement", "Agents"]),
		Record::new(
			"training",
			"AI Training",
			"Role-based training that builds shared standards, confidence, and responsible use.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["Training", "Enablement"]),
		Record::new(
			"leadership",
			"AI Fractional Leadership",
			"Embedded AI leadership to guide strategy, governance, and delivery without hiring full-time.",
		)
		.facet("Phase", "Assess")
		.facet("Topic", vec!["Governance", "Enablement"]),
		Record::new(
			"knowledgestack",
			"AI KnowledgeStack",
			"Dataset creation and structuring so AI outputs stay accurate, grounded, and useful.",
		)
		.facet("Phase", "Structure")
		.facet("Topic", vec!["KnowledgeStack"]),
		Record::new(
			"agents",
			"AI Agents (RAG + MCP)",
			"Secure, governed agents that answer questions and perform tasks using your internal knowledge.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["Agents", "KnowledgeStack"]),
		Record::new(
			"governance",
			"AI Governance + Guardrails",
			"Policies, permissions, and operating rules that leadership can trust.",
		)
		.facet("Phase", "Structure")
		.facet("Topic", vec!["Governance"]),
		Record::new(
			"maintenance",
			"AI Maintenance",
			"Ongoing updates, monitoring, and improvements so systems stay reliable over time.",
		)
		.facet("Phase", "Maintain")
		.facet("Topic", vec!["Maintenance"]),
		Record::new(
			"contentengine",
			"AI ContentEngine",
			"A brand-trained content system that produces consistent, reusable outputs at scale.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["ContentEngine"]),
		Record::new(
			"visualai",
			"VisualAI (Novaframe Studio)",
			"High-quality AI-generated visuals with brand control and creative oversight.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["VisualAI"]),
		Record::new(
			"aeo",
			"AEO",
			"Answer Engine Optimization to improve visibility across search and AI discovery systems.",
		)
		.facet("Phase", "Deploy")
		.facet("Topic", vec!["AEO"]),
	];

	Ok(Catalog::new(records, schema))
}

// ---------------------------------------------------------------------------
// Quick guides
// ---------------------------------------------------------------------------

/// Shortcut goals offered on the service library page. Each maps to one
/// facet selection applied on top of a clean slate.
const QUICK_GUIDES: &[(&str, &str, &str)] = &[
	("clarity", "Phase", "Assess"),
	("foundation", "Topic", "KnowledgeStack"),
	("automation", "Topic", "Agents"),
	("confidence", "Topic", "Governance"),
	("content", "Topic", "ContentEngine"),
	("adoption", "Topic", "Enablement"),
];

/// Apply a quick-guide goal to the service catalog: clear everything, then
/// select the goal's facet. Unknown goals just clear, matching the page's
/// behavior.
pub fn apply_quick_guide(catalog: &mut Catalog, goal: &str) {
	catalog.clear_filters();
	if let Some((_, category, value)) = QUICK_GUIDES.iter().find(|(g, _, _)| *g == goal) {
		catalog.toggle_filter(category, value);
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn case_studies_shape() {
		let catalog = case_studies().unwrap();
		assert_eq!(catalog.records().len(), 9);
		assert_eq!(catalog.featured().len(), 3);
		assert_eq!(
			catalog.schema().category_names(),
			vec!["Service", "Industry", "Outcome"]
		);
		assert!(catalog.schema().category("Industry").unwrap().searchable);
	}

	#[test]
	fn insights_shape() {
		let catalog = insights().unwrap();
		assert_eq!(catalog.records().len(), 9);
		assert_eq!(catalog.featured().len(), 3);
		assert_eq!(
			catalog.schema().category_names(),
			vec!["Phase", "Topic", "Format"]
		);
	}

	#[test]
	fn resources_shape() {
		let catalog = resources().unwrap();
		assert_eq!(catalog.records().len(), 9);
		assert_eq!(catalog.featured().len(), 2);
	}

	#[test]
	fn services_shape() {
		let catalog = services().unwrap();
		assert_eq!(catalog.records().len(), 11);
		assert!(catalog.featured().is_empty());
	}

	#[test]
	fn services_alias_reaches_professional_services() {
		let mut catalog = case_studies().unwrap();
		catalog.toggle_filter("Industry", "Services");
		let view = catalog.view();
		assert_eq!(view.cards.len(), 1);
		assert_eq!(view.cards[0].id, 5.into());
	}

	#[test]
	fn quick_guide_selects_single_facet() {
		let mut catalog = services().unwrap();
		catalog.set_query("agents");
		catalog.toggle_filter("Phase", "Deploy");
		apply_quick_guide(&mut catalog, "foundation");
		assert!(catalog.selection().query.is_empty());
		assert_eq!(catalog.selection().selected("Phase"), None);
		assert_eq!(
			catalog.selection().selected("Topic"),
			Some("KnowledgeStack")
		);
	}

	#[test]
	fn unknown_quick_guide_only_clears() {
		let mut catalog = services().unwrap();
		catalog.toggle_filter("Phase", "Deploy");
		apply_quick_guide(&mut catalog, "velocity");
		assert!(!catalog.selection().is_active());
	}
}
