//! hangul-romanize - 한글 로마자 변환 CLI
//!
//! 인자가 있으면 공백으로 이어 붙여 변환하고, 없으면 표준 입력을 줄 단위로 변환합니다.
//! UTF-8이 아닌 입력은 U+FFFD로 치환해 계속 진행합니다.

use hangul_romanize::config::load_config;
use hangul_romanize::Romanizer;
use std::ffi::OsString;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // 로깅 초기화 (기본 warn, RUST_LOG로 변경 가능)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = load_config();
    let romanizer = match Romanizer::from_config(&config) {
        Ok(r) => r,
        Err(e) => {
            log::warn!("잘못된 설정, 기본 성씨 테이블 사용: {}", e);
            Romanizer::new()
        }
    };

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    if !args.is_empty() {
        println!("{}", romanizer.romanize(join_args(&args).as_str()));
        return ExitCode::SUCCESS;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    match romanize_lines(&romanizer, stdin.lock(), stdout.lock()) {
        Ok(()) => ExitCode::SUCCESS,
        // 파이프가 닫힘
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("입출력 실패: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// 인자를 공백으로 연결 (UTF-8이 아닌 바이트는 U+FFFD)
fn join_args(args: &[OsString]) -> String {
    args.iter()
        .map(|a| a.to_string_lossy())
        .collect::<Vec<_>>()
        .join(" ")
}

/// 줄 바이트를 문자열로 변환, 끝의 "\n" / "\r\n" 제거
fn decode_line(mut bytes: &[u8], line_no: usize) -> String {
    if let Some(rest) = bytes.strip_suffix(b"\n") {
        bytes = rest.strip_suffix(b"\r").unwrap_or(rest);
    }
    match String::from_utf8_lossy(bytes) {
        std::borrow::Cow::Borrowed(s) => s.to_string(),
        std::borrow::Cow::Owned(s) => {
            log::warn!("{}번째 줄이 UTF-8이 아님, U+FFFD로 치환", line_no);
            s
        }
    }
}

/// 입력을 줄 단위로 변환해 출력
fn romanize_lines<R: BufRead, W: Write>(
    romanizer: &Romanizer,
    mut reader: R,
    mut writer: W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;
        let line = decode_line(&buf, line_no);
        writeln!(writer, "{}", romanizer.romanize(line.as_str()))?;
    }
    writer.flush()
}
