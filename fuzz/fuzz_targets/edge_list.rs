#![no_main]

use libfuzzer_sys::fuzz_target;
use graphscope::{algorithms::CycleAnalyzer, graph::load_edge_list, GraphConfig};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(graph) = load_edge_list(text, GraphConfig::network()) {
        if let Ok(analyzer) = CycleAnalyzer::new(graph.as_ref()) {
            let _ = analyzer.has_cycle();
        }
    }
});
