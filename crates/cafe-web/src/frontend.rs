//! Embedded landing page.
//!
//! A single static HTML document served at `/`, listing the API routes.

/// The landing page as a static string.
pub const INDEX_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Cafe &amp; Wifi API</title>
<style>
*,*::before,*::after{box-sizing:border-box;margin:0;padding:0}
:root{--bg:#faf7f2;--card:#fff;--text:#2b2118;--muted:#7a6a5a;--accent:#8b5a2b;--border:#e6dccf}
html,body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,Helvetica,Arial,sans-serif;background:var(--bg);color:var(--text)}
main{max-width:760px;margin:0 auto;padding:40px 20px}
h1{font-size:28px;margin-bottom:8px}
h1 span{color:var(--accent)}
p.lead{color:var(--muted);margin-bottom:28px}
.route{background:var(--card);border:1px solid var(--border);border-radius:10px;padding:14px 18px;margin-bottom:12px}
.route code{font-family:ui-monospace,SFMono-Regular,Menlo,monospace;font-size:14px}
.method{display:inline-block;min-width:64px;font-weight:600;color:var(--accent)}
.route p{color:var(--muted);font-size:14px;margin-top:6px}
</style>
</head>
<body>
<main>
<h1><span>Cafe</span> &amp; Wifi API</h1>
<p class="lead">Find laptop-friendly cafes: sockets, toilets, wifi and whether you can take calls.</p>

<div class="route"><span class="method">GET</span><code>/random</code>
<p>One cafe chosen at random.</p></div>

<div class="route"><span class="method">GET</span><code>/all</code>
<p>Every cafe in the database.</p></div>

<div class="route"><span class="method">GET</span><code>/search?loc=Peckham</code>
<p>Cafes at a location. Case does not matter.</p></div>

<div class="route"><span class="method">POST</span><code>/add</code>
<p>Form fields: name, map_url, img_url, loc, sockets, toilet, wifi, calls, seats, coffee_price.
Any non-empty value for sockets, toilet, wifi or calls counts as yes.</p></div>

<div class="route"><span class="method">PATCH</span><code>/update-price/&lt;cafe_id&gt;?new_price=£2.80</code>
<p>Change the price of a coffee.</p></div>

<div class="route"><span class="method">DELETE</span><code>/report-closed/&lt;cafe_id&gt;?api-key=&lt;key&gt;</code>
<p>Remove a cafe that has closed. Needs the admin api key.</p></div>
</main>
</body>
</html>
"##;
