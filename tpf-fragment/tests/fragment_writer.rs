//! End-to-end tests for the fragment writer: metadata/triple arrival
//! timing, pagination links, completion gating, and error paths.

use pretty_assertions::assert_eq;
use std::time::Duration;
use tpf_fragment::{
    BufferSink, BufferView, DatasourceInfo, FragmentMetadata, FragmentSink, FragmentUrls,
    PageQuery, SinkError, SourceError, StreamClosed, TripleStream, TripleStreamHandle,
    TurtleFragmentWriter, WriteError, WriteSettings,
};
use tpf_graph::{PrefixMap, Term, Triple};

fn write_settings() -> WriteSettings {
    let prefixes: PrefixMap = [
        ("rdf", "http://www.w3.org/1999/02/22-rdf-syntax-ns#"),
        ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ("hydra", "http://www.w3.org/ns/hydra/core#"),
        ("void", "http://rdfs.org/ns/void#"),
        ("dcterms", "http://purl.org/dc/terms/"),
    ]
    .into_iter()
    .collect();

    WriteSettings {
        datasource: DatasourceInfo {
            title: Some("My data".to_string()),
            url: Some("http://ex.org/data".to_string()),
            template_url: Some("http://ex.org/data{?subject,predicate,object}".to_string()),
        },
        fragment: FragmentUrls {
            url: "http://ex.org/data?fragment".to_string(),
            page_url: Some("http://ex.org/data?fragment&page=3".to_string()),
            first_page_url: Some("http://ex.org/data?fragment&page=1".to_string()),
            next_page_url: Some("http://ex.org/data?fragment&page=4".to_string()),
            previous_page_url: Some("http://ex.org/data?fragment&page=2".to_string()),
        },
        prefixes,
        query: PageQuery {
            offset: Some(200),
            limit: Some(100),
            pattern_string: Some("{ a ?b ?c }".to_string()),
        },
    }
}

const PROLOGUE: &str = "\
@prefix dcterms: <http://purl.org/dc/terms/>.\n\
@prefix hydra: <http://www.w3.org/ns/hydra/core#>.\n\
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#>.\n\
@prefix void: <http://rdfs.org/ns/void#>.\n\
@prefix xsd: <http://www.w3.org/2001/XMLSchema#>.\n";

const DESCRIPTION: &str = "\
<http://ex.org/data> a void:Dataset, hydra:Collection;\n    \
dcterms:title \"My data\";\n    \
hydra:search _:pattern;\n    \
void:subset <http://ex.org/data?fragment>.\n\
_:pattern hydra:template \"http://ex.org/data{?subject,predicate,object}\";\n    \
hydra:mapping _:subject, _:predicate, _:object.\n\
_:subject hydra:variable \"subject\";\n    \
hydra:property rdf:subject.\n\
_:predicate hydra:variable \"predicate\";\n    \
hydra:property rdf:predicate.\n\
_:object hydra:variable \"object\";\n    \
hydra:property rdf:object.\n\
<http://ex.org/data?fragment> void:subset <http://ex.org/data?fragment&page=3>.\n\
<http://ex.org/data?fragment&page=3> a hydra:PagedCollection;\n    \
dcterms:source <http://ex.org/data>;\n    \
dcterms:description \"Triples matching the pattern { a ?b ?c }\";\n    \
void:triples \"1234\"^^xsd:integer;\n    \
hydra:totalItems \"1234\"^^xsd:integer;\n    \
hydra:itemsPerPage \"100\"^^xsd:integer;\n    \
hydra:firstPage <http://ex.org/data?fragment&page=1>;\n    \
hydra:previousPage <http://ex.org/data?fragment&page=2>;\n    \
hydra:nextPage <http://ex.org/data?fragment&page=4>.\n";

const DATA: &str = "\
<http://ex.org/a> <http://ex.org/b> <http://ex.org/c>;\n    \
<http://ex.org/d> <http://ex.org/e>.\n\
<http://ex.org/f> <http://ex.org/g> <http://ex.org/h>.\n";

fn triple(s: &str, p: &str, o: &str) -> Triple {
    Triple::new(Term::iri(s), Term::iri(p), Term::iri(o))
}

fn data_triples() -> Vec<Triple> {
    vec![
        triple("http://ex.org/a", "http://ex.org/b", "http://ex.org/c"),
        triple("http://ex.org/a", "http://ex.org/d", "http://ex.org/e"),
        triple("http://ex.org/f", "http://ex.org/g", "http://ex.org/h"),
    ]
}

/// Spawn a fragment write over a fresh stream, returning the producer
/// handle, the output view, and the write task.
fn spawn_write(
    settings: WriteSettings,
) -> (
    TripleStreamHandle,
    BufferView,
    tokio::task::JoinHandle<Result<(), WriteError>>,
) {
    let (handle, stream) = TripleStream::channel(16);
    let sink = BufferSink::new();
    let view = sink.view();
    let task = tokio::spawn(async move {
        TurtleFragmentWriter::new()
            .write_fragment(sink, stream, &settings)
            .await
    });
    (handle, view, task)
}

/// Wait until the captured output contains `pattern`.
async fn wait_for_output(view: &BufferView, pattern: &str) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !view.contents().contains(pattern) {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .unwrap_or_else(|_| panic!("timed out waiting for output containing {pattern:?}"));
}

// ============================================================================
// Arrival timing
// ============================================================================

#[tokio::test]
async fn test_empty_stream_writes_only_description() {
    let (mut handle, view, task) = spawn_write(write_settings());
    handle.finish();
    handle.metadata(FragmentMetadata { total_count: 1234 });

    task.await.unwrap().unwrap();
    assert_eq!(view.contents(), format!("{PROLOGUE}{DESCRIPTION}"));
    assert!(view.is_finished());
}

#[tokio::test]
async fn test_metadata_before_first_triple_writes_description_first() {
    let (mut handle, view, task) = spawn_write(write_settings());
    handle.metadata(FragmentMetadata { total_count: 1234 });
    for t in data_triples() {
        handle.send(t).await.unwrap();
    }
    handle.finish();

    task.await.unwrap().unwrap();
    assert_eq!(view.contents(), format!("{PROLOGUE}{DESCRIPTION}{DATA}"));
}

#[tokio::test]
async fn test_metadata_after_stream_end_writes_description_last() {
    let (mut handle, view, task) = spawn_write(write_settings());
    for t in data_triples() {
        handle.send(t).await.unwrap();
    }
    // Let the writer drain the data before the metadata event fires, so the
    // description block provably lands after the last triple.
    wait_for_output(&view, "<http://ex.org/h>").await;
    handle.finish();
    handle.metadata(FragmentMetadata { total_count: 1234 });

    task.await.unwrap().unwrap();
    assert_eq!(view.contents(), format!("{PROLOGUE}{DATA}{DESCRIPTION}"));
}

#[tokio::test]
async fn test_metadata_between_triples_interleaves_description() {
    let (mut handle, view, task) = spawn_write(write_settings());
    let [t1, t2, t3] = <[Triple; 3]>::try_from(data_triples()).unwrap();

    handle.send(t1).await.unwrap();
    wait_for_output(&view, "<http://ex.org/c>").await;
    handle.metadata(FragmentMetadata { total_count: 1234 });
    wait_for_output(&view, "hydra:totalItems").await;
    handle.send(t2).await.unwrap();
    handle.send(t3).await.unwrap();
    handle.finish();

    task.await.unwrap().unwrap();
    let expected = format!(
        "{PROLOGUE}\
         <http://ex.org/a> <http://ex.org/b> <http://ex.org/c>.\n\
         {DESCRIPTION}\
         <http://ex.org/a> <http://ex.org/d> <http://ex.org/e>.\n\
         <http://ex.org/f> <http://ex.org/g> <http://ex.org/h>.\n"
    );
    assert_eq!(view.contents(), expected);
}

#[tokio::test]
async fn test_all_timings_agree_on_logical_content() {
    // Same triples, same settings: every arrival timing must produce the
    // same statements, differing only in where the description block sits.
    let (mut handle, early, task) = spawn_write(write_settings());
    handle.metadata(FragmentMetadata { total_count: 1234 });
    for t in data_triples() {
        handle.send(t).await.unwrap();
    }
    handle.finish();
    task.await.unwrap().unwrap();

    let (mut handle, late, task) = spawn_write(write_settings());
    for t in data_triples() {
        handle.send(t).await.unwrap();
    }
    wait_for_output(&late, "<http://ex.org/h>").await;
    handle.finish();
    handle.metadata(FragmentMetadata { total_count: 1234 });
    task.await.unwrap().unwrap();

    let reorder = |s: String| {
        let mut lines: Vec<String> = s.lines().map(String::from).collect();
        lines.sort();
        lines
    };
    assert_eq!(reorder(early.contents()), reorder(late.contents()));
}

// ============================================================================
// Page links
// ============================================================================

fn link_settings(offset: Option<u64>) -> WriteSettings {
    WriteSettings {
        datasource: DatasourceInfo::default(),
        fragment: FragmentUrls {
            url: "http://ex.org/f".to_string(),
            page_url: Some("mypage".to_string()),
            first_page_url: Some("myfirst".to_string()),
            next_page_url: Some("mynext".to_string()),
            previous_page_url: Some("myprevious".to_string()),
        },
        prefixes: PrefixMap::new(),
        query: PageQuery {
            offset,
            limit: Some(100),
            pattern_string: None,
        },
    }
}

async fn links_output(offset: Option<u64>) -> String {
    let (mut handle, view, task) = spawn_write(link_settings(offset));
    handle.finish();
    handle.metadata(FragmentMetadata { total_count: 1234 });
    task.await.unwrap().unwrap();
    view.contents()
}

#[tokio::test]
async fn test_limit_without_offset_has_first_and_next_links() {
    let output = links_output(None).await;
    assert!(output.contains("myfirst"));
    assert!(output.contains("mynext"));
    assert!(!output.contains("myprevious"));
}

#[tokio::test]
async fn test_offset_before_end_has_all_links() {
    // 1133 + 100 = 1233 < 1234
    let output = links_output(Some(1133)).await;
    assert!(output.contains("myfirst"));
    assert!(output.contains("mynext"));
    assert!(output.contains("myprevious"));
}

#[tokio::test]
async fn test_offset_past_end_has_no_next_link() {
    // 1135 + 100 = 1235 >= 1234
    let output = links_output(Some(1135)).await;
    assert!(output.contains("myfirst"));
    assert!(!output.contains("mynext"));
    assert!(output.contains("myprevious"));
}

// ============================================================================
// Completion gating and ordering
// ============================================================================

#[tokio::test]
async fn test_completion_waits_for_metadata_after_stream_end() {
    let (mut handle, view, task) = spawn_write(write_settings());
    for t in data_triples() {
        handle.send(t).await.unwrap();
    }
    handle.finish();
    wait_for_output(&view, "<http://ex.org/h>").await;

    // Stream has ended, but metadata has not arrived: no completion yet.
    tokio::time::sleep(Duration::from_millis(20)).await;
    assert!(!view.is_finished());

    handle.metadata(FragmentMetadata { total_count: 1234 });
    task.await.unwrap().unwrap();
    assert!(view.is_finished());
    assert!(view.contents().ends_with(DESCRIPTION));
}

#[tokio::test]
async fn test_shared_subjects_stay_in_arrival_order() {
    let (mut handle, view, task) = spawn_write(write_settings());
    handle.metadata(FragmentMetadata { total_count: 1234 });
    // Subject `a` recurs after `f`; it must reopen, never merge backwards.
    handle
        .send(triple("http://ex.org/a", "http://ex.org/b", "http://ex.org/c"))
        .await
        .unwrap();
    handle
        .send(triple("http://ex.org/f", "http://ex.org/g", "http://ex.org/h"))
        .await
        .unwrap();
    handle
        .send(triple("http://ex.org/a", "http://ex.org/d", "http://ex.org/e"))
        .await
        .unwrap();
    handle.finish();

    task.await.unwrap().unwrap();
    let expected_tail = "\
        <http://ex.org/a> <http://ex.org/b> <http://ex.org/c>.\n\
        <http://ex.org/f> <http://ex.org/g> <http://ex.org/h>.\n\
        <http://ex.org/a> <http://ex.org/d> <http://ex.org/e>.\n";
    assert!(view.contents().ends_with(expected_tail));
}

#[tokio::test]
async fn test_writer_reuse_produces_identical_output() {
    let writer = TurtleFragmentWriter::new();
    let settings = write_settings();
    let mut outputs = Vec::new();

    for _ in 0..2 {
        let (mut handle, stream) = TripleStream::channel(16);
        let sink = BufferSink::new();
        let view = sink.view();
        handle.metadata(FragmentMetadata { total_count: 1234 });
        for t in data_triples() {
            handle.send(t).await.unwrap();
        }
        handle.finish();
        writer.write_fragment(sink, stream, &settings).await.unwrap();
        outputs.push(view.contents());
    }

    assert_eq!(outputs[0], outputs[1]);
}

// ============================================================================
// Error paths
// ============================================================================

struct FailingSink {
    writes_left: usize,
}

#[async_trait::async_trait]
impl FragmentSink for FailingSink {
    async fn write(&mut self, _chunk: &str) -> Result<(), SinkError> {
        if self.writes_left == 0 {
            return Err(SinkError::Write("connection reset".to_string()));
        }
        self.writes_left -= 1;
        Ok(())
    }

    async fn finish(&mut self) -> Result<(), SinkError> {
        Ok(())
    }
}

#[tokio::test]
async fn test_missing_metadata_fails_instead_of_hanging() {
    let settings = write_settings();
    let (handle, stream) = TripleStream::channel(4);
    let sink = BufferSink::new();
    let view = sink.view();
    // Dropping the handle ends the stream with the metadata sender gone.
    drop(handle);

    let err = TurtleFragmentWriter::new()
        .write_fragment(sink, stream, &settings)
        .await
        .unwrap_err();
    assert!(matches!(err, WriteError::MissingMetadata));
    assert!(!view.is_finished());
}

#[tokio::test]
async fn test_source_error_aborts_without_completing_sink() {
    let (mut handle, view, task) = spawn_write(write_settings());
    handle
        .send(triple("http://ex.org/a", "http://ex.org/b", "http://ex.org/c"))
        .await
        .unwrap();
    handle
        .fail(SourceError::new("backing store unavailable"))
        .await
        .unwrap();

    let err = task.await.unwrap().unwrap_err();
    assert!(matches!(err, WriteError::Source(_)));
    assert!(!view.is_finished());
}

#[tokio::test]
async fn test_sink_failure_aborts_and_disconnects_producer() {
    let settings = write_settings();
    let (handle, stream) = TripleStream::channel(1);
    let task = tokio::spawn(async move {
        TurtleFragmentWriter::new()
            .write_fragment(FailingSink { writes_left: 0 }, stream, &settings)
            .await
    });

    handle
        .send(triple("http://ex.org/a", "http://ex.org/b", "http://ex.org/c"))
        .await
        .unwrap();
    let err = task.await.unwrap().unwrap_err();
    assert!(matches!(err, WriteError::Sink(SinkError::Write(_))));

    // The writer dropped its receivers, so the producer is disconnected.
    assert_eq!(
        handle
            .send(triple("http://ex.org/a", "http://ex.org/b", "http://ex.org/c"))
            .await,
        Err(StreamClosed)
    );
}

#[tokio::test]
async fn test_malformed_term_aborts_write() {
    let (mut handle, view, task) = spawn_write(write_settings());
    // A literal can never be a subject.
    handle
        .send(Triple::new(
            Term::string("not a subject"),
            Term::iri("http://ex.org/p"),
            Term::iri("http://ex.org/o"),
        ))
        .await
        .unwrap();
    handle.finish();

    let err = task.await.unwrap().unwrap_err();
    assert!(matches!(err, WriteError::MalformedTerm(_)));
    assert!(!view.is_finished());
}
