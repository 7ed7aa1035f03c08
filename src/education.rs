//! Static educational content about compound interest

use serde::Serialize;

/// Opening explanation and the core formula
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntroContent {
    pub title: &'static str,
    pub description: &'static str,
    pub formula: &'static str,
    pub formula_explanation: &'static str,
}

/// A real-world use of compounding with a worked example
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApplicationCard {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct KeyPrinciple {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Terms shown before the calculator is used
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Disclaimer {
    pub summary: &'static str,
    pub points: &'static [&'static str],
    pub closing: &'static str,
}

/// Everything the education section displays
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EducationalContent {
    pub intro: IntroContent,
    pub applications: &'static [ApplicationCard],
    pub principles: &'static [KeyPrinciple],
    pub disclaimer: Disclaimer,
}

pub const INTRO: IntroContent = IntroContent {
    title: "Understanding Compound Interest for Investment Growth",
    description: "Compound interest is often called the \"eighth wonder of the world\" because of its \
        remarkable ability to grow money exponentially over time. Unlike simple interest, which only \
        earns interest on the principal amount, compound interest earns interest on both the principal \
        and the accumulated interest from previous periods, making it a powerful tool for building \
        wealth and achieving financial goals.",
    formula: "A = P(1 + r/n)^(nt)",
    formula_explanation: "where A is the final amount, P is the principal, r is the interest rate, \
        n is the number of times interest is compounded per year, and t is the time in years.",
};

pub const APPLICATIONS: &[ApplicationCard] = &[
    ApplicationCard {
        id: "savings",
        title: "Savings Growth",
        description: "Compound interest accelerates the growth of savings accounts and money market \
            accounts, where interest is typically compounded daily. Even small deposits can grow \
            significantly over time, helping you build an emergency fund or save for future goals.",
        example: "Example: £1,000 in a savings account with 5% interest compounded monthly will grow \
            to £1,051.16 in one year and continue increasing thereafter.",
    },
    ApplicationCard {
        id: "investments",
        title: "Investment Returns",
        description: "In investment portfolios, compound interest magnifies gains over time, especially \
            beneficial for long-term investors. Reinvesting dividends and capital gains can \
            substantially increase your returns and help you build wealth more quickly.",
        example: "Example: A £10,000 investment earning 7% annually compounded will grow to \
            £19,671.51 after 10 years without any additional contributions.",
    },
    ApplicationCard {
        id: "retirement",
        title: "Retirement Planning",
        description: "Compound interest plays a crucial role in retirement savings, allowing \
            investments to grow exponentially over decades. Starting early can make a dramatic \
            difference in retirement wealth and help ensure financial security later in life.",
        example: "Example: Investing £200 monthly from age 25 to 65 with 8% annual returns can grow \
            to over £620,000 for retirement.",
    },
    ApplicationCard {
        id: "loans",
        title: "Loan Calculations",
        description: "Understanding compound interest is essential for borrowers to comprehend the \
            true cost of loans and mortgages over time. Interest compounds on unpaid balances, \
            potentially increasing debt significantly if not managed properly.",
        example: "Example: A £200,000 mortgage at 4% for 30 years results in total payments of about \
            £343,739, with £143,739 in interest.",
    },
    ApplicationCard {
        id: "wealth",
        title: "Wealth Building",
        description: "Compound interest is a powerful tool for building long-term wealth, as it allows \
            earnings to generate additional earnings. The effect becomes more pronounced over longer \
            time periods, making early and consistent investing essential.",
        example: "Example: £5,000 invested with 10% annual returns will become £10,000 in about 7 \
            years and £20,000 in about 14 years through the power of compounding.",
    },
    ApplicationCard {
        id: "tax",
        title: "Tax-Advantaged Growth",
        description: "Compound interest is even more powerful in tax-advantaged accounts like ISAs, \
            SIPPs, and pension funds. When taxes don't reduce yearly gains, the compounding effect \
            accelerates significantly, maximizing your investment returns.",
        example: "Example: £10,000 in a tax-free ISA growing at 6% annually will be worth about \
            £32,071 after 20 years, compared to £24,883 in a taxed account (at 20% tax rate).",
    },
];

pub const PRINCIPLES: &[KeyPrinciple] = &[
    KeyPrinciple {
        id: "time",
        title: "Time is Your Greatest Ally",
        description: "The longer your money can compound, the more dramatic the growth. Starting early \
            is one of the most powerful financial decisions you can make. Even small amounts invested \
            for longer periods often outperform larger amounts invested later.",
    },
    KeyPrinciple {
        id: "frequency",
        title: "Compounding Frequency Matters",
        description: "The more frequently interest is compounded (daily vs. monthly vs. annually), the \
            more your money will grow over time. When comparing investment options, look at both the \
            interest rate and how often compounding occurs.",
    },
    KeyPrinciple {
        id: "rate",
        title: "Interest Rate Impact",
        description: "Even small differences in interest rates can result in significantly different \
            outcomes over long periods due to the exponential nature of compound growth. A 1-2% \
            improvement in your returns can dramatically increase your wealth over decades.",
    },
    KeyPrinciple {
        id: "consistency",
        title: "Regular Contributions Accelerate Growth",
        description: "Adding regular contributions to your principal amount dramatically increases the \
            power of compound interest. Consistent monthly or quarterly additions to your investments \
            can multiply your final results many times over.",
    },
];

pub const DISCLAIMER: Disclaimer = Disclaimer {
    summary: "This tool is designed for informational and educational purposes only. While we strive \
        for accuracy and reliability, the calculations and content may be incomplete, inaccurate, or \
        not applicable to your specific financial situation. Users must exercise their own judgment \
        and verify all output before acting upon it.",
    points: &[
        "The calculator and educational content are not a substitute for professional financial \
            advice. For personalized investment guidance, please consult a qualified financial advisor.",
        "Investment returns are never guaranteed. Past performance is not indicative of future \
            results, and actual returns may vary significantly from the calculations shown.",
        "You are solely responsible for reviewing, verifying, and validating any output before \
            relying on it for decision-making.",
        "The developers and providers of this tool are not liable for any errors, omissions, or \
            consequences arising from the use or reliance on the calculator results or educational \
            content.",
    ],
    closing: "For precise financial guidance specific to your situation, please consult a qualified \
        financial professional.",
};

/// Get the full educational content bundle
pub fn educational_content() -> EducationalContent {
    EducationalContent {
        intro: INTRO,
        applications: APPLICATIONS,
        principles: PRINCIPLES,
        disclaimer: DISCLAIMER,
    }
}
