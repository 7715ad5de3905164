//! The fixed seed catalog: every module, lesson, strategy, challenge,
//! leaderboard entry and the learner profile the app ships with.
//!
//! Seeded once at startup via [`crate::AppServices::seeded`]; nothing here is
//! created or deleted at runtime.

use chrono::NaiveDate;

use quantduo_core::model::{
    ActivitySummary, Badge, Challenge, ChallengeId, Difficulty, InteractiveKind, LeaderboardEntry,
    Lesson, LessonContent, LessonId, LessonSection, MarketInsight, Module, ModuleId, PointTotals,
    ProfileStat, QuizQuestion, Requirement, Strategy, StrategyId, StrategyPerformance,
    UserId, UserProfile,
};

use crate::error::CatalogError;

fn lesson(
    id: &str,
    title: &str,
    duration: &str,
    completed: bool,
    locked: bool,
) -> Result<Lesson, CatalogError> {
    Ok(Lesson::new(LessonId::new(id), title, duration, completed, locked)?)
}

//
// ─── MODULES ───────────────────────────────────────────────────────────────────
//

/// The four learning modules with their twenty lessons, in unlock order.
pub fn modules() -> Result<Vec<Module>, CatalogError> {
    Ok(vec![
        Module::new(
            ModuleId::new("quant-basics"),
            "Quant Basics",
            "Learn the fundamental concepts of quantitative trading",
            "function",
            "#4C9AFF",
            vec![
                lesson("qb-1", "Introduction to Quant Trading", "5 min", true, false)?,
                lesson("qb-2", "Statistics for Trading", "10 min", true, false)?,
                lesson("qb-3", "Time Series Analysis", "15 min", true, false)?,
                lesson("qb-4", "Probability Distributions", "12 min", false, false)?,
                lesson("qb-5", "Hypothesis Testing", "10 min", false, true)?,
            ],
        )?,
        Module::new(
            ModuleId::new("financial-instruments"),
            "Financial Instruments",
            "Master different financial instruments and markets",
            "chart.bar.fill",
            "#00C853",
            vec![
                lesson("fi-1", "Stocks and Indices", "8 min", true, false)?,
                lesson("fi-2", "Options Basics", "12 min", false, false)?,
                lesson("fi-3", "Futures Contracts", "10 min", false, false)?,
                lesson("fi-4", "ETFs and Mutual Funds", "8 min", false, true)?,
                lesson("fi-5", "Fixed Income Securities", "15 min", false, true)?,
            ],
        )?,
        Module::new(
            ModuleId::new("alpha-signals"),
            "Alpha Signals",
            "Discover and validate alpha signals in the market",
            "waveform.path.ecg",
            "#FF9800",
            vec![
                lesson("as-1", "What is Alpha?", "5 min", true, false)?,
                lesson("as-2", "Factor Models", "15 min", false, false)?,
                lesson("as-3", "Signal Processing", "12 min", false, true)?,
                lesson("as-4", "Machine Learning for Signals", "20 min", false, true)?,
                lesson("as-5", "Signal Validation", "10 min", false, true)?,
            ],
        )?,
        Module::new(
            ModuleId::new("risk-management"),
            "Risk Management",
            "Learn to manage risk in your trading strategies",
            "shield.fill",
            "#FF3D00",
            vec![
                lesson("rm-1", "Risk Metrics", "10 min", false, true)?,
                lesson("rm-2", "Position Sizing", "8 min", false, true)?,
                lesson("rm-3", "Portfolio Optimization", "15 min", false, true)?,
                lesson("rm-4", "Drawdown Management", "12 min", false, true)?,
                lesson("rm-5", "Risk-Adjusted Returns", "10 min", false, true)?,
            ],
        )?,
    ])
}

//
// ─── LESSON CONTENT ────────────────────────────────────────────────────────────
//

/// Authored lesson bodies. Only the first three Quant Basics lessons are
/// authored so far; the remaining lessons have list entries but no body yet.
pub fn lesson_contents() -> Result<Vec<LessonContent>, CatalogError> {
    Ok(vec![intro_to_quant()?, statistics_for_trading()?, time_series_analysis()?])
}

fn intro_to_quant() -> Result<LessonContent, CatalogError> {
    let sections = vec![
        LessonSection::Text {
            body: "Quantitative trading (quant trading) is a method of executing trades \
                   using mathematical and statistical models to identify opportunities. \
                   Unlike traditional trading that relies on fundamental analysis or \
                   intuition, quant trading uses algorithms to make trading decisions."
                .into(),
        },
        LessonSection::Image {
            url: "https://via.placeholder.com/600x300?text=Quant+Trading+Overview".into(),
            caption: Some("Quantitative Trading Process Overview".into()),
        },
        LessonSection::Text {
            body: "Key components of quantitative trading include:\n\n\
                   • Data Collection: Gathering historical and real-time market data\n\
                   • Alpha Discovery: Finding signals that predict price movements\n\
                   • Strategy Development: Creating rules for entering and exiting trades\n\
                   • Backtesting: Testing strategies against historical data\n\
                   • Risk Management: Controlling exposure and potential losses\n\
                   • Execution: Implementing trades efficiently in the market"
                .into(),
        },
        LessonSection::Chart {
            kind: "line-chart".into(),
            caption: Some("Example of a simple moving average crossover strategy".into()),
        },
        LessonSection::Code {
            source: "import pandas as pd\nimport numpy as np\n\n\
                     # Example of a simple moving average calculation\n\
                     def calculate_sma(prices, window):\n    \
                     return prices.rolling(window=window).mean()"
                .into(),
            language: Some("python".into()),
            caption: Some("Simple Python code for calculating moving averages".into()),
        },
        LessonSection::Video {
            url: "https://example.com/intro-quant-trading.mp4".into(),
            caption: Some("Introduction to Quantitative Trading Process".into()),
        },
    ];

    let quiz = vec![
        QuizQuestion::new(
            "What is the primary difference between quantitative trading and traditional trading?",
            vec![
                "Quantitative trading only works in stock markets".into(),
                "Quantitative trading uses mathematical models instead of intuition".into(),
                "Traditional trading is always more profitable".into(),
                "Quantitative trading doesn't require any market knowledge".into(),
            ],
            1,
            "Quantitative trading relies on mathematical and statistical models to make \
             trading decisions, while traditional trading often relies on fundamental \
             analysis or trader intuition.",
        )?,
        QuizQuestion::new(
            "Which of the following is NOT a key component of quantitative trading?",
            vec![
                "Data Collection".into(),
                "Alpha Discovery".into(),
                "Emotional Analysis".into(),
                "Backtesting".into(),
            ],
            2,
            "Emotional analysis is not part of quantitative trading. In fact, one of the \
             advantages of quant trading is removing emotions from trading decisions.",
        )?,
        QuizQuestion::new(
            "What is backtesting in quantitative trading?",
            vec![
                "Running a strategy in reverse".into(),
                "Testing strategies against historical data".into(),
                "Analyzing competitor strategies".into(),
                "Predicting future market movements".into(),
            ],
            1,
            "Backtesting involves testing a trading strategy against historical data to \
             see how it would have performed in the past.",
        )?,
    ];

    Ok(LessonContent::new(
        LessonId::new("qb-1"),
        "Introduction to Quant Trading",
        "Quant Basics",
        "5 min",
        sections,
        quiz,
    )?)
}

fn statistics_for_trading() -> Result<LessonContent, CatalogError> {
    let sections = vec![
        LessonSection::Text {
            body: "Statistical concepts form the foundation of quantitative trading. \
                   Understanding these concepts is crucial for developing robust trading \
                   strategies and properly interpreting market data."
                .into(),
        },
        LessonSection::Formula {
            name: "Standard Deviation".into(),
            latex: r"\sigma = \sqrt{\frac{1}{N}\sum_{i=1}^{N}(x_i - \mu)^2}".into(),
            caption: Some("A measure of volatility or risk in financial markets".into()),
        },
        LessonSection::Text {
            body: "Key statistical concepts in trading include:\n\n\
                   • Mean and Variance: Measuring central tendency and dispersion\n\
                   • Standard Deviation: Quantifying market volatility\n\
                   • Correlation: Understanding relationships between assets\n\
                   • Skewness and Kurtosis: Analyzing return distributions\n\
                   • Statistical Significance: Validating trading hypotheses"
                .into(),
        },
        LessonSection::Image {
            url: "https://via.placeholder.com/600x300?text=Normal+Distribution".into(),
            caption: Some("Normal distribution of returns and confidence intervals".into()),
        },
        LessonSection::Chart {
            kind: "histogram".into(),
            caption: Some("Distribution of daily returns for S&P 500".into()),
        },
        LessonSection::Interactive {
            prompt: "Adjust the confidence interval to see how it affects the range of \
                     expected returns"
                .into(),
            kind: InteractiveKind::Slider,
            caption: Some("Interactive confidence interval demonstration".into()),
        },
    ];

    let quiz = vec![
        QuizQuestion::new(
            "What does a high standard deviation in returns indicate?",
            vec![
                "Low volatility".into(),
                "High volatility".into(),
                "High returns".into(),
                "Low returns".into(),
            ],
            1,
            "A high standard deviation indicates high volatility or dispersion in returns, \
             meaning the investment is more risky.",
        )?,
        QuizQuestion::new(
            "What is the Sharpe ratio?",
            vec![
                "The ratio of winning trades to losing trades".into(),
                "The ratio of return to risk (standard deviation)".into(),
                "The ratio of long positions to short positions".into(),
                "The ratio of portfolio beta to market beta".into(),
            ],
            1,
            "The Sharpe ratio measures risk-adjusted return by dividing excess return by \
             the standard deviation of returns.",
        )?,
        QuizQuestion::new(
            "What does a positive skewness in returns distribution indicate?",
            vec![
                "The distribution has a longer left tail".into(),
                "The distribution has a longer right tail".into(),
                "The distribution is perfectly symmetrical".into(),
                "The distribution has no outliers".into(),
            ],
            1,
            "Positive skewness indicates the distribution has a longer right tail, meaning \
             there are more extreme positive returns than extreme negative returns.",
        )?,
    ];

    Ok(LessonContent::new(
        LessonId::new("qb-2"),
        "Statistics for Trading",
        "Quant Basics",
        "10 min",
        sections,
        quiz,
    )?)
}

fn time_series_analysis() -> Result<LessonContent, CatalogError> {
    let sections = vec![
        LessonSection::Text {
            body: "Time series analysis is essential for quantitative trading as financial \
                   markets generate sequential data points ordered by time. Understanding \
                   how to analyze this data helps traders identify patterns and make \
                   predictions."
                .into(),
        },
        LessonSection::Text {
            body: "Key components of time series analysis include:\n\n\
                   • Trend: The long-term direction of the data\n\
                   • Seasonality: Regular patterns that repeat at predictable intervals\n\
                   • Cyclicality: Irregular patterns that don't have a fixed frequency\n\
                   • Noise: Random variations in the data"
                .into(),
        },
        LessonSection::Chart {
            kind: "time-series-decomposition".into(),
            caption: Some(
                "Decomposition of a time series into trend, seasonality, and residual \
                 components"
                    .into(),
            ),
        },
        LessonSection::Code {
            source: "import pandas as pd\n\n\
                     def calculate_ema(prices, span=20):\n    \
                     return pd.Series(prices).ewm(span=span, adjust=False).mean()"
                .into(),
            language: Some("python".into()),
            caption: Some("Calculating Exponential Moving Average in Python".into()),
        },
        LessonSection::Text {
            body: "Stationarity is an important concept in time series analysis. A \
                   stationary time series has constant statistical properties over time, \
                   making it easier to model. Many financial time series are \
                   non-stationary and require transformation (like differencing) before \
                   analysis."
                .into(),
        },
    ];

    let quiz = vec![
        QuizQuestion::new(
            "What is the main difference between seasonality and cyclicality in time series?",
            vec![
                "Seasonality is only found in stock markets".into(),
                "Cyclicality affects longer time periods".into(),
                "Seasonality has regular, predictable intervals while cyclicality is irregular"
                    .into(),
                "They are different terms for the same concept".into(),
            ],
            2,
            "Seasonality refers to patterns that repeat at regular, predictable intervals \
             (like yearly or quarterly), while cyclicality refers to fluctuations that \
             don't have a fixed frequency.",
        )?,
        QuizQuestion::new(
            "Why is stationarity important in time series analysis?",
            vec![
                "It makes the data more volatile".into(),
                "It ensures constant statistical properties over time".into(),
                "It guarantees profitable trading".into(),
                "It eliminates the need for backtesting".into(),
            ],
            1,
            "A stationary time series has constant statistical properties over time (mean, \
             variance, autocorrelation), making it easier to model and forecast.",
        )?,
        QuizQuestion::new(
            "Which of the following is NOT a common time series model used in quantitative \
             trading?",
            vec![
                "Moving Averages".into(),
                "ARIMA".into(),
                "GARCH".into(),
                "ANOVA".into(),
            ],
            3,
            "ANOVA (Analysis of Variance) is a statistical method for comparing means \
             between groups, not a time series model. Moving Averages, ARIMA, and GARCH \
             are all commonly used for time series analysis in trading.",
        )?,
    ];

    Ok(LessonContent::new(
        LessonId::new("qb-3"),
        "Time Series Analysis",
        "Quant Basics",
        "15 min",
        sections,
        quiz,
    )?)
}

//
// ─── STRATEGIES ────────────────────────────────────────────────────────────────
//

pub fn strategies() -> Result<Vec<Strategy>, CatalogError> {
    Ok(vec![
        Strategy::new(
            StrategyId::new("strat-1"),
            "Mean Reversion ETF",
            "A strategy that buys oversold ETFs and sells when they return to their mean",
            StrategyPerformance::new(12.5, 1.8, 8.2, 62.0)?,
            vec!["Mean Reversion".into(), "ETFs".into(), "Daily".into()],
        )?,
        Strategy::new(
            StrategyId::new("strat-2"),
            "Momentum Stocks",
            "Captures momentum in high-volume stocks with recent price breakouts",
            StrategyPerformance::new(18.7, 1.5, 15.3, 58.0)?,
            vec!["Momentum".into(), "Stocks".into(), "Weekly".into()],
        )?,
        Strategy::new(
            StrategyId::new("strat-3"),
            "Volatility Arbitrage",
            "Exploits differences between implied and realized volatility in options",
            StrategyPerformance::new(9.2, 2.1, 5.8, 70.0)?,
            vec!["Volatility".into(), "Options".into(), "Market Neutral".into()],
        )?,
    ])
}

//
// ─── CHALLENGES ────────────────────────────────────────────────────────────────
//

pub fn challenges() -> Result<Vec<Challenge>, CatalogError> {
    Ok(vec![
        Challenge::new(
            ChallengeId::new("chal-1"),
            "Build a Moving Average Crossover Strategy",
            "Create a strategy using SMA and EMA crossovers that achieves a Sharpe ratio > 1.0",
            Difficulty::Beginner,
            100,
            false,
            vec![
                "Create a strategy that uses two moving averages - one fast (shorter \
                 period) and one slow (longer period)."
                    .into(),
                "Generate buy signals when the fast MA crosses above the slow MA.".into(),
                "Generate sell signals when the fast MA crosses below the slow MA.".into(),
                "Backtest your strategy on at least 3 years of data using SPY or similar \
                 ETF."
                    .into(),
                "Optimize the MA periods to achieve a Sharpe ratio > 1.0".into(),
            ],
            vec![
                Requirement::new("Implement both SMA and EMA crossover logic", false),
                Requirement::new("Achieve Sharpe ratio > 1.0", false),
                Requirement::new("Include proper position sizing logic", false),
                Requirement::new("Document your strategy with comments", false),
            ],
        )?,
        Challenge::new(
            ChallengeId::new("chal-2"),
            "Optimize a Factor Model",
            "Improve the given multi-factor model to reduce drawdown while maintaining returns",
            Difficulty::Intermediate,
            250,
            false,
            vec![
                "Analyze the provided multi-factor model which currently has high \
                 drawdown."
                    .into(),
                "Identify which factors are contributing most to the drawdown risk.".into(),
                "Optimize factor weights to reduce maximum drawdown while maintaining \
                 similar returns."
                    .into(),
                "Add at least one additional factor that helps with risk management.".into(),
                "Document your changes and explain your reasoning.".into(),
            ],
            vec![
                Requirement::new("Reduce max drawdown by at least 25%", false),
                Requirement::new("Maintain at least 90% of original returns", false),
                Requirement::new("Add at least one new factor", false),
                Requirement::new("Provide statistical justification for changes", false),
            ],
        )?,
        Challenge::new(
            ChallengeId::new("chal-3"),
            "Develop a Market Neutral Strategy",
            "Create a strategy with near-zero beta to the S&P 500 while achieving positive \
             returns",
            Difficulty::Advanced,
            500,
            false,
            vec![
                "Design a long-short equity strategy with balanced exposure.".into(),
                "Implement hedging techniques to minimize market beta.".into(),
                "Ensure the strategy has a beta of between -0.1 and 0.1 to SPY.".into(),
                "Achieve positive returns over a 5-year backtest period.".into(),
                "Maintain low correlation with major market indices.".into(),
            ],
            vec![
                Requirement::new("Achieve beta between -0.1 and 0.1", false),
                Requirement::new("Generate positive returns over 5 years", false),
                Requirement::new("Maintain Sharpe ratio > 1.2", false),
                Requirement::new("Keep correlation with S&P 500 below 0.3", false),
            ],
        )?,
        Challenge::new(
            ChallengeId::new("chal-4"),
            "Pairs Trading Challenge",
            "Identify and trade correlated pairs of stocks to profit from temporary price \
             divergences",
            Difficulty::Intermediate,
            300,
            true,
            vec![
                "Develop an algorithm to identify highly correlated pairs of stocks \
                 within sectors."
                    .into(),
                "Implement statistical measures to detect temporary divergences between \
                 pairs."
                    .into(),
                "Create entry and exit logic based on mean reversion principles.".into(),
                "Backtest your pairs trading strategy across multiple sectors.".into(),
                "Implement risk management rules to handle correlation breakdowns.".into(),
            ],
            vec![
                Requirement::new("Identify at least 5 tradable pairs", true),
                Requirement::new("Implement cointegration testing", true),
                Requirement::new("Create z-score based trading signals", true),
                Requirement::new("Manage correlation breakdown risk", true),
            ],
        )?,
    ])
}

//
// ─── LEADERBOARD ───────────────────────────────────────────────────────────────
//

pub fn leaderboard() -> Result<Vec<LeaderboardEntry>, CatalogError> {
    Ok(vec![
        LeaderboardEntry::new(
            UserId::new("user-1"),
            "Sarah K.",
            "S",
            42,
            PointTotals::new(4850, 17980, 118430),
            ActivitySummary::new(12, 5, 3),
        )?
        .with_rank_change(0)
        .with_badges(vec![
            "top_performer".into(),
            "challenge_master".into(),
            "streak_30".into(),
        ])
        .as_friend()
        .with_win_rate(68)?
        .with_total_strategies(8),
        LeaderboardEntry::new(
            UserId::new("user-2"),
            "Michael T.",
            "M",
            39,
            PointTotals::new(4720, 18560, 125720),
            ActivitySummary::new(8, 9, 1),
        )?
        .with_rank_change(1)
        .with_badges(vec!["strategy_expert".into(), "streak_20".into()])
        .with_win_rate(62)?
        .with_total_strategies(12),
        LeaderboardEntry::new(
            UserId::new("user-3"),
            "Jessica L.",
            "J",
            37,
            PointTotals::new(4580, 16890, 102550),
            ActivitySummary::new(15, 3, 2),
        )?
        .with_rank_change(-1)
        .with_badges(vec!["quant_scholar".into()])
        .as_friend()
        .with_win_rate(71)?
        .with_total_strategies(5),
        LeaderboardEntry::new(
            UserId::new("user-4"),
            "You",
            "A",
            35,
            PointTotals::new(4450, 15640, 94200),
            ActivitySummary::new(10, 6, 2),
        )?
        .with_rank_change(2)
        .with_badges(vec!["streak_10".into(), "quick_learner".into()])
        .as_current_user()
        .with_win_rate(58)?
        .with_total_strategies(6),
        LeaderboardEntry::new(
            UserId::new("user-5"),
            "David R.",
            "D",
            33,
            PointTotals::new(4320, 14870, 88960),
            ActivitySummary::new(7, 4, 1),
        )?
        .with_rank_change(-1)
        .with_badges(vec!["streak_10".into()])
        .with_win_rate(55)?
        .with_total_strategies(4),
    ])
}

//
// ─── HOME SCREEN ───────────────────────────────────────────────────────────────
//

pub fn market_insights() -> Vec<MarketInsight> {
    vec![
        MarketInsight::new(
            "insight-1",
            "S&P 500 Volatility Spike",
            "Market volatility increased by 15% this week",
            "chart.xyaxis.line",
            "#FF9800",
        ),
        MarketInsight::new(
            "insight-2",
            "Tech Sector Momentum",
            "Technology stocks showing strong momentum signals",
            "arrow.up.forward",
            "#00C853",
        ),
        MarketInsight::new(
            "insight-3",
            "Bond Yield Inversion",
            "Treasury yield curve showing signs of inversion",
            "arrow.down.forward",
            "#FF3D00",
        ),
    ]
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

pub fn profile() -> Result<UserProfile, CatalogError> {
    // The 7-day streak is anchored to the seed dataset's "yesterday"
    // (2023-11-13, the day before the fixed test timestamp), not the wall
    // clock. Real activity recorded later extends or resets it as usual.
    let joined = NaiveDate::from_ymd_opt(2023, 3, 1).unwrap_or_default();
    let last_active = NaiveDate::from_ymd_opt(2023, 11, 13);

    Ok(UserProfile::new(
        "Alex Trader",
        "alextrader",
        12,
        2450,
        joined,
        7,
        last_active,
        48,
        5,
        vec![
            Badge::new(
                "badge-1",
                "First Strategy",
                "chart.line.uptrend.xyaxis.circle.fill",
                "#4C9AFF",
                "Created your first trading strategy",
            ),
            Badge::new(
                "badge-2",
                "Week Streak",
                "flame.circle.fill",
                "#FF9800",
                "Maintained a 7-day learning streak",
            ),
            Badge::new(
                "badge-3",
                "Alpha Hunter",
                "magnifyingglass.circle.fill",
                "#00C853",
                "Found your first alpha signal",
            ),
        ],
        vec![
            ProfileStat::new("Best Sharpe Ratio", "2.1"),
            ProfileStat::new("Best Return", "+18.7%"),
            ProfileStat::new("Strategies Created", "3"),
            ProfileStat::new("Challenges Completed", "5"),
        ],
    )?)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
