//! The deck itself. Pure data: the engine never reads any of this text.

use crate::deck::palette::*;
use crate::deck::{stagger, Background, Block, Content, Layout, Slide};

pub fn deck() -> &'static [Slide] {
    &DECK
}

static DECK: [Slide; 11] = [
    Slide {
        name: "title",
        layout: Layout::Centered,
        background: Background::Vertical {
            top: RED_600,
            bottom: RED_800,
        },
        ink: WHITE,
        muted: RED_200,
        accent: WHITE,
        panel: RED_800,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Heading("AI CODING"),
            },
            Block {
                delay_ms: 200,
                content: Content::Subheading("@ PALFINGER"),
            },
            Block {
                delay_ms: 400,
                content: Content::Lead("Our Journey, Tools & Challenges"),
            },
            Block {
                delay_ms: 600,
                content: Content::Note("Workshop with AVL - December 2025"),
            },
            Block {
                delay_ms: 1000,
                content: Content::Hint("Press right arrow or click to continue"),
            },
        ],
    },
    Slide {
        name: "big-picture",
        layout: Layout::Flow,
        background: Background::Solid(WHITE),
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: GRAY_50,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("The Big Picture: 2025 AI Adoption"),
            },
            Block {
                delay_ms: stagger(0),
                content: Content::Bullet("2025 = Biggest AI adoption year in coding at Palfinger"),
            },
            Block {
                delay_ms: stagger(1),
                content: Content::Bullet("Focus: Provide tools, let developers experiment"),
            },
            Block {
                delay_ms: stagger(2),
                content: Content::Bullet(
                    "Current reality: Different expertise levels, varying approaches",
                ),
            },
            Block {
                delay_ms: stagger(3),
                content: Content::Bullet("No common guidelines yet - we're in transformation"),
            },
            Block {
                delay_ms: 600,
                content: Content::Card {
                    title: "2025",
                    subtitle: "Year of AI Coding",
                    detail: "",
                },
            },
        ],
    },
    Slide {
        name: "usage-patterns",
        layout: Layout::Flow,
        background: Background::Vertical {
            top: GRAY_50,
            bottom: GRAY_100,
        },
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: WHITE,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Usage Patterns"),
            },
            Block {
                delay_ms: 0,
                content: Content::Lead("What we're observing across our development teams"),
            },
            Block {
                delay_ms: stagger(0),
                content: Content::Card {
                    title: "Small Tasks",
                    subtitle: "",
                    detail: "Implementation of well-scoped features and fixes",
                },
            },
            Block {
                delay_ms: stagger(1),
                content: Content::Card {
                    title: "Boilerplate",
                    subtitle: "",
                    detail: "Templating and code generation for repetitive patterns",
                },
            },
            Block {
                delay_ms: stagger(2),
                content: Content::Card {
                    title: "Investigation",
                    subtitle: "",
                    detail: "Debugging and issue analysis with AI assistance",
                },
            },
            Block {
                delay_ms: stagger(3),
                content: Content::Card {
                    title: "Brainstorming",
                    subtitle: "",
                    detail: "Architecture decisions and solution exploration",
                },
            },
            Block {
                delay_ms: stagger(4),
                content: Content::Card {
                    title: "Scripts & Tools",
                    subtitle: "",
                    detail: "Creating small utilities, specialized apps and automation tools",
                },
            },
            Block {
                delay_ms: stagger(4),
                content: Content::Note(
                    "* Based on conversations and meetings - no formal survey yet",
                ),
            },
        ],
    },
    Slide {
        name: "tool-landscape",
        layout: Layout::Flow,
        background: Background::Solid(WHITE),
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: GRAY_50,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Our Tool Landscape"),
            },
            Block {
                delay_ms: stagger(0),
                content: Content::Card {
                    title: "PAIP",
                    subtitle: "Palfinger AI Portal",
                    detail: "GPT-5 for investigations & analysis",
                },
            },
            Block {
                delay_ms: stagger(1),
                content: Content::Card {
                    title: "GitHub Copilot",
                    subtitle: "Standard Tool",
                    detail: "IDE-integrated code completion",
                },
            },
            Block {
                delay_ms: stagger(2),
                content: Content::Card {
                    title: "Claude Code",
                    subtitle: "Agentic AI",
                    detail: "Advanced autonomous coding",
                },
            },
            Block {
                delay_ms: stagger(3),
                content: Content::Card {
                    title: "Shadow Tools",
                    subtitle: "Unofficial",
                    detail: "Cursor, ChatGPT, etc.",
                },
            },
        ],
    },
    Slide {
        name: "copilot",
        layout: Layout::Flow,
        background: Background::Solid(GRAY_900),
        ink: WHITE,
        muted: GRAY_400,
        accent: RED_500,
        panel: GRAY_800,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("GitHub Copilot"),
            },
            Block {
                delay_ms: 0,
                content: Content::Lead("The Reliable Workhorse"),
            },
            Block {
                delay_ms: 300,
                content: Content::Bullet("Well integrated: VS Code, Visual Studio, Rider"),
            },
            Block {
                delay_ms: 400,
                content: Content::Bullet("Limitation: Codebases on Azure DevOps, not GitHub"),
            },
            Block {
                delay_ms: 500,
                content: Content::Bullet("Solid, reliable choice in rapidly changing landscape"),
            },
            Block {
                delay_ms: 400,
                content: Content::Stat {
                    target: 100,
                    suffix: "",
                    label: "Licenses",
                },
            },
            Block {
                delay_ms: 500,
                content: Content::Stat {
                    target: 90,
                    suffix: "%",
                    label: "Regular Usage",
                },
            },
        ],
    },
    Slide {
        name: "claude-code",
        layout: Layout::Flow,
        background: Background::Vertical {
            top: ORANGE_50,
            bottom: RED_100,
        },
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: WHITE,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Claude Code"),
            },
            Block {
                delay_ms: 0,
                content: Content::Lead("The Game Changer"),
            },
            Block {
                delay_ms: 200,
                content: Content::Timeline {
                    when: "Summer 2025",
                    event: "Trial started",
                    detail: "Mixed feedback initially",
                    highlight: false,
                },
            },
            Block {
                delay_ms: 200,
                content: Content::Timeline {
                    when: "Claude 4.5 Sonnet",
                    event: "Turning point",
                    detail: "Agentic AI coding became real",
                    highlight: true,
                },
            },
            Block {
                delay_ms: 200,
                content: Content::Timeline {
                    when: "Now",
                    event: "53 members",
                    detail: "60-70% weekly usage",
                    highlight: false,
                },
            },
            Block {
                delay_ms: 400,
                content: Content::Card {
                    title: "Highlight",
                    subtitle: "Non-technical adoption is happening",
                    detail: "A Product Owner vibe-coded a process automation web app!",
                },
            },
        ],
    },
    Slide {
        name: "pr-reviews",
        layout: Layout::Flow,
        background: Background::Solid(WHITE),
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: GRAY_50,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Claude Code PR Reviews"),
            },
            Block {
                delay_ms: 0,
                content: Content::Lead("A Concrete Win"),
            },
            Block {
                delay_ms: 200,
                content: Content::Note(
                    "Introduced Sept 2025 in Angular monorepo (Azure DevOps workaround)",
                ),
            },
            Block {
                delay_ms: 300,
                content: Content::Stat {
                    target: 80,
                    suffix: "%",
                    label: "PRs with CC Comments",
                },
            },
            Block {
                delay_ms: 400,
                content: Content::Stat {
                    target: 90,
                    suffix: "%",
                    label: "Comments Resolved",
                },
            },
            Block {
                delay_ms: 500,
                content: Content::Stat {
                    target: 13,
                    suffix: "%",
                    label: "Won't Fix",
                },
            },
            Block {
                delay_ms: 600,
                content: Content::Stat {
                    target: 15,
                    suffix: "%",
                    label: "With Discussions",
                },
            },
            Block {
                delay_ms: 700,
                content: Content::Note(
                    "High acceptance rate shows developers find value in AI code reviews",
                ),
            },
        ],
    },
    Slide {
        name: "shadow-tools",
        layout: Layout::Flow,
        background: Background::Scatter {
            base: GRAY_100,
            glyph: "?",
            seed: 20,
        },
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: WHITE,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Shadow Tools - The Reality"),
            },
            Block {
                delay_ms: 200,
                content: Content::Card {
                    title: "Known unofficial tools in use",
                    subtitle: "",
                    detail: "",
                },
            },
            Block {
                delay_ms: 200,
                content: Content::Tags(&[
                    "Claude.ai",
                    "Cursor",
                    "ChatGPT",
                    "Codex",
                    "Antigravity",
                ]),
            },
            Block {
                delay_ms: 400,
                content: Content::Card {
                    title: "Current approach: Tolerating it",
                    subtitle: "",
                    detail: "Sporadic visibility into actual usage",
                },
            },
        ],
    },
    Slide {
        name: "challenges",
        layout: Layout::Flow,
        background: Background::Vertical {
            top: GRAY_900,
            bottom: GRAY_800,
        },
        ink: WHITE,
        muted: GRAY_400,
        accent: RED_500,
        panel: GRAY_800,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Challenges We're Facing"),
            },
            Block {
                delay_ms: stagger(0),
                content: Content::Card {
                    title: "Wild West Mode",
                    subtitle: "",
                    detail: "No guidelines or policies yet",
                },
            },
            Block {
                delay_ms: stagger(1),
                content: Content::Card {
                    title: "Unknown ROI",
                    subtitle: "",
                    detail: "No impact metrics to measure success",
                },
            },
            Block {
                delay_ms: stagger(2),
                content: Content::Card {
                    title: "Increasing Costs",
                    subtitle: "",
                    detail: "~$2k/m Copilot, ~$2.5k/m Claude Code",
                },
            },
            Block {
                delay_ms: stagger(3),
                content: Content::Card {
                    title: "Rapid Change",
                    subtitle: "",
                    detail: "New tools, models, features constantly",
                },
            },
            Block {
                delay_ms: stagger(4),
                content: Content::Card {
                    title: "Code Sprawl",
                    subtitle: "",
                    detail: "Lower barriers = more scripts & tools to maintain",
                },
            },
            Block {
                delay_ms: stagger(4),
                content: Content::Note(
                    "Total monthly spend: ~$4.5k across ~150 active users",
                ),
            },
        ],
    },
    Slide {
        name: "takeaways",
        layout: Layout::Flow,
        background: Background::Solid(WHITE),
        ink: GRAY_900,
        muted: GRAY_500,
        accent: RED_600,
        panel: GRAY_50,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Kicker("PALFINGER"),
            },
            Block {
                delay_ms: 0,
                content: Content::Heading("Key Takeaways"),
            },
            Block {
                delay_ms: stagger(0),
                content: Content::Numbered {
                    number: "01",
                    title: "AI Coding is Real",
                    detail: "GitHub Copilot + Claude Code are our pillars",
                },
            },
            Block {
                delay_ms: stagger(1),
                content: Content::Numbered {
                    number: "02",
                    title: "Agentic AI is a Game Changer",
                    detail: "Even non-developers are creating apps",
                },
            },
            Block {
                delay_ms: stagger(2),
                content: Content::Numbered {
                    number: "03",
                    title: "PR Review Shows Concrete Value",
                    detail: "90% resolution rate speaks for itself",
                },
            },
            Block {
                delay_ms: stagger(3),
                content: Content::Numbered {
                    number: "04",
                    title: "Balance is the Challenge",
                    detail: "Experimentation vs. governance remains open",
                },
            },
        ],
    },
    Slide {
        name: "closing",
        layout: Layout::Centered,
        background: Background::Vertical {
            top: RED_600,
            bottom: RED_800,
        },
        ink: WHITE,
        muted: RED_200,
        accent: WHITE,
        panel: RED_800,
        blocks: &[
            Block {
                delay_ms: 0,
                content: Content::Heading("Thank You"),
            },
            Block {
                delay_ms: 0,
                content: Content::Lead("Looking forward to the discussion"),
            },
            Block {
                delay_ms: 0,
                content: Content::Note("www.palfinger.com"),
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_has_eleven_slides() {
        assert_eq!(deck().len(), 11);
    }

    #[test]
    fn every_slide_has_content() {
        for slide in deck() {
            assert!(!slide.blocks.is_empty(), "slide {} is empty", slide.name);
        }
    }

    #[test]
    fn reveal_offsets_are_bounded() {
        for slide in deck() {
            for block in slide.blocks {
                assert!(
                    block.delay_ms <= 1000,
                    "slide {} has an off-schedule delay",
                    slide.name
                );
            }
        }
    }

    #[test]
    fn stat_slides_declare_the_expected_targets() {
        let copilot = &deck()[4];
        assert_eq!(copilot.stat_targets().collect::<Vec<_>>(), vec![100, 90]);

        let pr_reviews = &deck()[6];
        assert_eq!(
            pr_reviews.stat_targets().collect::<Vec<_>>(),
            vec![80, 90, 13, 15]
        );
    }

    #[test]
    fn only_the_shadow_slide_scatters() {
        let scattered: Vec<_> = deck()
            .iter()
            .filter(|slide| matches!(slide.background, Background::Scatter { .. }))
            .map(|slide| slide.name)
            .collect();
        assert_eq!(scattered, vec!["shadow-tools"]);
    }

    #[test]
    fn tag_rows_are_never_empty() {
        for slide in deck() {
            for block in slide.blocks {
                if let Content::Tags(tags) = block.content {
                    assert!(!tags.is_empty());
                }
            }
        }
    }
}
