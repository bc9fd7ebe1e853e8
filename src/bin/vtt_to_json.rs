use captionparser::read_local_caption_document;
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        println!("Usage: vtt_to_json <file.vtt>");
        println!("Example: vtt_to_json tests/testdata/sample.vtt");
        return;
    }
    let file_path = &args[1];

    let document = read_local_caption_document(file_path);

    match serde_json::to_string(&document) {
        Ok(json) => println!("{}", json),
        Err(err) => println!(
            "{}",
            serde_json::json!({ "captions": [{ "error": err.to_string() }] })
        ),
    }
}
