//! Generated stand-ins for the front-end files when they are not on disk.

pub const FALLBACK_STYLE: &str = "/* CSS 파일이 없습니다 */";

pub const FALLBACK_SCRIPT: &str = r#"// bookgate fallback script: served when no script.js is deployed.
const API_BASE_URL = '';

async function searchBooks(query, topK = 6) {
    const response = await fetch(`${API_BASE_URL}/search`, {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
            npz: 'books_emb.npz',
            meta: 'books_meta.csv',
            query: query,
            top_k: topK,
            source_csv: 'book.csv',
            randomize: true
        })
    });
    return response.json();
}

async function chatWithGemini(message) {
    try {
        const response = await fetch(`${API_BASE_URL}/chat`, {
            method: 'POST',
            headers: { 'Content-Type': 'application/json' },
            body: JSON.stringify({ message: message })
        });
        const data = await response.json();
        return data.reply;
    } catch (error) {
        console.error('채팅 오류:', error);
        return 'AI 채팅 중 오류가 발생했습니다.';
    }
}

if (typeof performSearch !== 'undefined') {
    performSearch = async function (event) {
        if (event) event.preventDefault();

        const input = document.getElementById('searchInput');
        const term = input ? input.value.trim() : '';
        if (!term) return;

        try {
            if (/책|도서|검색|추천/.test(term)) {
                const data = await searchBooks(term);
                if (typeof addBookGallery !== 'undefined' && data.results) {
                    addBookGallery(data.results);
                }
            } else {
                const reply = await chatWithGemini(term);
                if (typeof addChatMessage !== 'undefined') {
                    addChatMessage('ai', reply);
                }
            }
        } catch (error) {
            console.error('검색 오류:', error);
            if (typeof addChatMessage !== 'undefined') {
                addChatMessage('ai', '검색 중 오류가 발생했습니다.');
            }
        }
    };
}

console.log('bookgate API connected');
"#;

const INDEX_HEAD: &str = r#"<!DOCTYPE html>
<html lang="ko">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>도서 검색 및 AI 채팅 서버</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; background: #f5f5f5; }
        .container { max-width: 800px; margin: 0 auto; background: white; padding: 30px; border-radius: 10px; }
        h1 { color: #333; text-align: center; }
        .status { padding: 15px; margin: 20px 0; border-radius: 5px; }
        .success { background: #d4edda; color: #155724; }
        .warning { background: #fff3cd; color: #856404; }
        .file-list { background: #f8f9fa; padding: 15px; border-radius: 5px; }
        .api-test button { background: #007bff; color: white; border: none; padding: 10px 20px; border-radius: 5px; cursor: pointer; margin: 5px; }
        #testResult { margin-top: 15px; padding: 15px; background: #f8f9fa; border-radius: 5px; min-height: 50px; }
    </style>
</head>
<body>
    <div class="container">
        <h1>도서 검색 및 AI 채팅 서버</h1>
        <div class="status success"><strong>서버가 실행 중입니다.</strong></div>
        <div class="status warning">
            <strong>index.html 파일이 없습니다.</strong><br>
            전체 웹 인터페이스를 사용하려면 index.html, style.css, script.js 파일을 배포 폴더에 넣어주세요.
        </div>
        <div class="file-list">
            <h3>현재 폴더의 파일들:</h3>
            <ul>
"#;

const INDEX_TAIL: &str = r#"            </ul>
        </div>
        <div class="api-test">
            <h3>API 테스트</h3>
            <button onclick="testBookSearch()">도서 검색 테스트</button>
            <button onclick="testChat()">AI 채팅 테스트</button>
            <div id="testResult"></div>
        </div>
    </div>
    <script>
        async function testBookSearch() {
            const out = document.getElementById('testResult');
            out.textContent = '도서 검색 테스트 중...';
            try {
                const response = await fetch('/search', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({
                        npz: 'books_emb.npz',
                        meta: 'books_meta.csv',
                        query: '컴퓨터',
                        top_k: 3,
                        source_csv: 'book.csv',
                        randomize: true
                    })
                });
                const data = await response.json();
                const source = response.headers.get('x-search-source') || 'unknown';
                out.innerHTML = '<strong>도서 검색 결과: ' + (data.results ? data.results.length : 0)
                    + '개 (' + source + ')</strong><pre></pre>';
                out.querySelector('pre').textContent = JSON.stringify(data, null, 2);
            } catch (error) {
                out.textContent = '도서 검색 실패: ' + error.message;
            }
        }

        async function testChat() {
            const out = document.getElementById('testResult');
            out.textContent = 'AI 채팅 테스트 중...';
            try {
                const response = await fetch('/chat', {
                    method: 'POST',
                    headers: { 'Content-Type': 'application/json' },
                    body: JSON.stringify({ message: '안녕하세요!' })
                });
                const data = await response.json();
                out.textContent = 'AI 응답: ' + data.reply;
            } catch (error) {
                out.textContent = 'AI 채팅 실패: ' + error.message;
            }
        }
    </script>
</body>
</html>
"#;

/// Landing page listing `entries` with buttons that exercise `/search` and
/// `/chat`.
pub fn fallback_index(entries: &[String]) -> String {
    let items: String = entries
        .iter()
        .map(|name| {
            format!(
                "                <li>{}</li>\n",
                html_escape::encode_text(name)
            )
        })
        .collect();

    format!("{INDEX_HEAD}{items}{INDEX_TAIL}")
}
