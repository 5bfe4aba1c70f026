// src/narrative.rs
//
// Insight sentences. Pure templating over a page's Metrics: the only logic
// is sign branching on delta metrics and one-decimal formatting. Nothing is
// computed here.

use crate::config::consts::{HOME_AWAY_UNDEFINED, NO_DATA_FILTERED};
use crate::config::options::PageKind;
use crate::metrics::{Metrics, key};

/// Insight text for `kind`. Static pages have none.
pub fn synthesize(kind: PageKind, m: &Metrics) -> String {
    if matches!(kind, PageKind::Home | PageKind::AboutUs) {
        return String::new();
    }
    if m.is_empty_view() {
        return s!(NO_DATA_FILTERED);
    }
    match kind {
        PageKind::Overview => overview(m),
        PageKind::MatchAnalysis => match_analysis(m),
        PageKind::PlayerHub => player_hub(m),
        PageKind::TeamAnalytics => team_analytics(m),
        PageKind::StrategyLab => strategy_lab(m),
        PageKind::Home | PageKind::AboutUs => String::new(),
    }
}

/// "a home advantage" for a positive delta, otherwise "an away advantage".
pub fn advantage_phrase(delta: f64) -> &'static str {
    if delta > 0.0 { "a home advantage" } else { "an away advantage" }
}

/// "better" for a positive delta, otherwise "worse".
pub fn comparison_word(delta: f64) -> &'static str {
    if delta > 0.0 { "better" } else { "worse" }
}

fn overview(m: &Metrics) -> String {
    format!(
        "In the selected season(s) ({seasons}), teams have averaged {avg} fantasy points per match, \
         with {team} showing the strongest performance at home venues. \
         Player selection patterns indicate that {role} positions contribute most significantly \
         to fantasy success.",
        seasons = m.get(key::SEASONS),
        avg = m.get(key::AVG_FANTASY_POINTS),
        team = m.get(key::TOP_HOME_TEAM),
        role = m.get(key::TOP_ROLE),
    )
}

fn match_analysis(m: &Metrics) -> String {
    format!(
        "Across the {n} matches analyzed, {venue} has emerged as the highest-scoring venue \
         with an average of {venue_avg} fantasy points per match. \
         {comparison} \
         The closest margin of victory was {margin} points.",
        n = m.get(key::MATCHES_ANALYZED),
        venue = m.get(key::HIGHEST_SCORING_VENUE),
        venue_avg = m.get(key::TOP_VENUE_AVG),
        comparison = home_away_clause(m),
        margin = m.get(key::CLOSEST_MARGIN),
    )
}

/// Neutral sentence when the home/away delta is undefined.
fn home_away_clause(m: &Metrics) -> String {
    let delta = m.get(key::HOME_ADVANTAGE);
    match delta.as_f64() {
        Some(d) if delta.is_available() => format!(
            "When comparing home and away performances, there is {} \
             with an average difference of {:.1} points.",
            advantage_phrase(d),
            d.abs(),
        ),
        _ => s!(HOME_AWAY_UNDEFINED),
    }
}

fn player_hub(m: &Metrics) -> String {
    format!(
        "Among the {n} players analyzed, {scorer} leads with {points} fantasy points. \
         Players in the {role} position have the highest average, at {role_avg} points. \
         {consistent} is the most consistent performer relative to their average.",
        n = m.get(key::PLAYERS_ANALYZED),
        scorer = m.get(key::TOP_SCORER),
        points = m.get(key::TOP_SCORER_POINTS),
        role = m.get(key::TOP_ROLE),
        role_avg = m.get(key::TOP_ROLE_AVG),
        consistent = m.get(key::MOST_CONSISTENT),
    )
}

fn team_analytics(m: &Metrics) -> String {
    let pct = m.get(key::HOME_ADVANTAGE_PCT);
    let overall = match pct.as_f64() {
        Some(p) if pct.is_available() => format!(
            "Overall, teams show {:.1}% {} performance at home venues.",
            p.abs(),
            comparison_word(p),
        ),
        _ => s!(HOME_AWAY_UNDEFINED),
    };
    format!(
        "The analysis of {n} teams reveals that {home} dominates at home with an average of \
         {home_avg} fantasy points, while {away} performs best in away matches. \
         {overall} \
         The most improved team across the selected seasons is {improved}, \
         with a {improvement:.1}% change in fantasy points.",
        n = m.get(key::TEAMS_COMPARED),
        home = m.get(key::STRONGEST_HOME),
        home_avg = m.get(key::STRONGEST_HOME_AVG),
        away = m.get(key::BEST_AWAY),
        improved = m.get(key::MOST_IMPROVED),
        improvement = m.number_or(key::IMPROVEMENT_PCT, 0.0),
    )
}

fn strategy_lab(m: &Metrics) -> String {
    format!(
        "Analysis of {n} dream team selections shows that {player} appears most frequently \
         in optimal lineups ({count} times). Captains contribute an average of {cap:.1}x \
         the points of regular players, with vice captains at {vice:.1}x. \
         Successful fantasy teams include a higher proportion of {role} players \
         ({role_pct:.1}% of dream team selections).",
        n = m.get(key::DREAM_TEAM_MATCHES),
        player = m.get(key::TOP_DREAM_PLAYER),
        count = m.get(key::TOP_DREAM_COUNT),
        cap = m.number_or(key::CAPTAINCY_IMPACT, 0.0),
        vice = m.number_or(key::VICE_CAPTAINCY_IMPACT, 0.0),
        role = m.get(key::TOP_DREAM_ROLE),
        role_pct = m.number_or(key::TOP_DREAM_ROLE_PCT, 0.0),
    )
}
