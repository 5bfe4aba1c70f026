// src/pages/about.rs
use crate::{
    config::options::{ AnalysisOptions, PageKind::{ self, * } },
    filter::FilterSpec,
    output::RenderedOutput,
    store::RecordStore,
};

use super::Page;

pub struct AboutPage;
pub static PAGE: AboutPage = AboutPage;

const BODY: &[&str] = &[
    "Know the Trend, Lead the Game.",
    "We turn raw sports and business data into dashboards people can act on.",
    "Our work covers predictive analytics, visualization and custom reporting.",
    "Every figure on these pages is computed from the loaded match file; \
     nothing is sent anywhere.",
];

impl Page for AboutPage {
    fn kind(&self) -> PageKind { AboutUs }
    fn title(&self) -> &'static str { "About Us" }

    fn render_with(&self, _: &RecordStore, _: &FilterSpec, _: &AnalysisOptions) -> RenderedOutput {
        let mut out = RenderedOutput::new(self.title());
        out.body = BODY.iter().map(|p| s!(*p)).collect();
        out
    }
}
