//! HTML presentation for the log pages. Pure string renderers over the same
//! data and error kinds the JSON API uses; every dynamic value is escaped
//! before interpolation.

use crate::core::persistence::logs::log_access_error::LogAccessError;
use crate::core::persistence::logs::log_file_entity::{LogFileContent, LogFileDescriptor};

const INDEX_STYLE: &str = "\
body{font-family:'Segoe UI',Tahoma,sans-serif;max-width:1100px;margin:0 auto;padding:20px;background:#f7fafc;color:#333}\
.container{background:#fff;border-radius:12px;padding:30px;box-shadow:0 10px 30px rgba(0,0,0,.08)}\
h1{color:#4a5568;text-align:center}\
.file-item{background:#f8f9fa;padding:12px;border-radius:8px;border:1px solid #e2e8f0;margin-bottom:10px}\
.file-link{color:#667eea;text-decoration:none;font-weight:600}\
.no-files{text-align:center;color:#718096;font-style:italic;padding:40px}\
.api-info{background:#e6fffa;padding:15px;border-radius:8px;margin-top:20px;border-left:4px solid #38b2ac}";

const LOG_STYLE: &str = "\
body{font-family:'Courier New',monospace;margin:0;padding:20px;background:#1a202c;color:#e2e8f0;line-height:1.6}\
.header{background:#2d3748;padding:20px;border-radius:8px;margin-bottom:20px;border-left:4px solid #48bb78}\
.info-item{display:inline-block;background:#4a5568;padding:8px 12px;border-radius:5px;margin-right:10px}\
.content{background:#2d3748;padding:20px;border-radius:8px;white-space:pre-wrap;border:1px solid #4a5568}\
.back-link{color:#68d391;text-decoration:none;font-weight:bold}\
.empty{color:#a0aec0;font-style:italic;text-align:center;padding:40px}";

const ERROR_STYLE: &str = "\
body{font-family:Arial,sans-serif;max-width:800px;margin:50px auto;padding:20px}\
.error{background:#fed7d7;border:1px solid #fc8181;padding:20px;border-radius:8px}\
.error h1{color:#e53e3e}\
.error-details{background:#f7fafc;padding:15px;border-radius:5px;margin-top:15px}\
a{color:#667eea}";

/// Index page: file count, a link row per file, API usage hints.
pub fn render_index(files: &[LogFileDescriptor]) -> String {
    let listing = if files.is_empty() {
        "<div class=\"no-files\">\
         <h3>No log files found</h3>\
         <p>No .txt files are currently available in the logs directory.</p>\
         </div>"
            .to_string()
    } else {
        let mut rows = String::new();
        for file in files {
            let name = escape_html(&file.name);
            rows.push_str(&format!(
                "<div class=\"file-item\"><a class=\"file-link\" href=\"/logs/{name}\">{name}</a></div>"
            ));
        }
        rows
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Error Log Reader</title>\n\
         <style>{INDEX_STYLE}</style>\n\
         </head>\n<body>\n<div class=\"container\">\n\
         <h1>Error Log Reader</h1>\n\
         <p>Reads and displays the content of .txt log files stored on the server.</p>\n\
         <h2>Available Log Files ({count})</h2>\n\
         {listing}\n\
         <div class=\"api-info\">\
         <p><strong>View a file:</strong> <code>GET /logs/filename.txt</code></p>\
         <p><strong>List all files:</strong> <code>GET /api/files</code></p>\
         <p><strong>File content API:</strong> <code>GET /api/logs/filename.txt</code></p>\
         </div>\n\
         </div>\n</body>\n</html>",
        count = files.len(),
    )
}

/// File page: header metadata (size in KB, modification time, line count)
/// above the escaped content.
pub fn render_log_page(content: &LogFileContent) -> String {
    let filename = escape_html(&content.filename);
    let body = if content.content.trim().is_empty() {
        "<div class=\"empty\">This file is empty</div>".to_string()
    } else {
        escape_html(&content.content)
    };

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"UTF-8\">\n\
         <title>Log: {filename}</title>\n\
         <style>{LOG_STYLE}</style>\n\
         </head>\n<body>\n\
         <div class=\"header\">\n\
         <h1>{filename}</h1>\n\
         <div class=\"info-item\"><strong>Size:</strong> {size} KB</div>\n\
         <div class=\"info-item\"><strong>Modified:</strong> {modified}</div>\n\
         <div class=\"info-item\"><strong>Lines:</strong> {lines}</div>\n\
         <div><a class=\"back-link\" href=\"/\">&larr; Back to file list</a></div>\n\
         </div>\n\
         <div class=\"content\">{body}</div>\n\
         </body>\n</html>",
        size = size_kb(content.size),
        modified = content.modified.format("%Y-%m-%d %H:%M:%S UTC"),
        lines = content.lines,
    )
}

/// Error page: friendly message per kind plus the technical details the
/// failure carries (filename, attempted path, OS detail).
pub fn render_error_page(err: &LogAccessError) -> String {
    let mut details = String::new();
    if let Some(filename) = err.filename() {
        details.push_str(&format!(
            "<p><strong>File:</strong> {}</p>",
            escape_html(filename)
        ));
    }
    if let Some(path) = err.path() {
        details.push_str(&format!(
            "<p><strong>Path:</strong> <code>{}</code></p>",
            escape_html(&path.display().to_string())
        ));
    }
    if let Some(detail) = err.detail() {
        details.push_str(&format!(
            "<p><strong>Message:</strong> {}</p>",
            escape_html(detail)
        ));
    }
    if let Some(code) = err.os_code() {
        details.push_str(&format!("<p><strong>Error Code:</strong> {code}</p>"));
    }
    let details = if details.is_empty() {
        String::new()
    } else {
        format!("<div class=\"error-details\"><h3>Technical Details:</h3>{details}</div>")
    };

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <title>{title}</title>\n\
         <style>{ERROR_STYLE}</style>\n\
         </head>\n<body>\n\
         <div class=\"error\">\n\
         <h1>{title}</h1>\n\
         <p>{message}</p>\n\
         {details}\n\
         </div>\n\
         <a href=\"/\">&larr; Back to file list</a>\n\
         </body>\n</html>",
        title = error_title(err),
        message = escape_html(&err.to_string()),
    )
}

/// Fallback page for unknown routes.
pub fn render_not_found_page() -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n\
         <title>Page Not Found</title>\n\
         <style>{ERROR_STYLE}</style>\n\
         </head>\n<body>\n\
         <h1>404 - Page Not Found</h1>\n\
         <p>The requested page could not be found.</p>\n\
         <a href=\"/\">&larr; Go to home page</a>\n\
         </body>\n</html>"
    )
}

fn error_title(err: &LogAccessError) -> &'static str {
    match err {
        LogAccessError::InvalidFileType { .. } => "Invalid File Type",
        LogAccessError::InvalidFileName { .. } => "Invalid File Name",
        LogAccessError::NotFound { .. } => "File Not Found",
        LogAccessError::PermissionDenied { .. } => "Permission Denied",
        LogAccessError::IsDirectory { .. } => "Not a File",
        LogAccessError::Read { .. } => "Error Reading File",
        LogAccessError::DirectoryList { .. } => "Error Reading Logs Directory",
    }
}

/// Size in kilobytes, rounded to two decimals.
fn size_kb(size: u64) -> String {
    format!("{:.2}", size as f64 / 1024.0)
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
