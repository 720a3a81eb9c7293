// Site-wide styles. Page specific rules sit next to the markup that uses them.
pub const GLOBAL: &str = r#"
    :root {
        --ink: #14212b;
        --muted: #5d6b75;
        --sea: #1f6f8b;
        --sand: #f6f1ea;
        --card: #ffffff;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        font-family: 'Inter', system-ui, sans-serif;
        color: var(--ink);
        background: var(--sand);
    }
    a { color: inherit; }

    /* Navigation */
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 40;
        padding: 20px 0;
        transition: background 0.3s ease, padding 0.3s ease, box-shadow 0.3s ease;
    }
    .top-nav.scrolled {
        background: rgba(255, 255, 255, 0.95);
        padding: 12px 0;
        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.08);
    }
    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 24px;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }
    .nav-logo { font-weight: 700; font-size: 1.4rem; text-decoration: none; }
    .nav-right { display: flex; gap: 24px; align-items: center; }
    .nav-link { text-decoration: none; }
    .nav-cta {
        text-decoration: none;
        padding: 10px 18px;
        border-radius: 999px;
        background: var(--sea);
        color: #fff;
    }
    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: var(--ink); transition: transform 0.3s ease; }
    .burger-menu.open span:nth-child(1) { transform: translateY(7px) rotate(45deg); }
    .burger-menu.open span:nth-child(2) { opacity: 0; }
    .burger-menu.open span:nth-child(3) { transform: translateY(-7px) rotate(-45deg); }
    @media (max-width: 768px) {
        .burger-menu { display: block; }
        .nav-right {
            display: none;
            position: absolute;
            top: 100%;
            left: 0;
            right: 0;
            flex-direction: column;
            padding: 24px;
            background: #fff;
        }
        .nav-right.mobile-menu-open { display: flex; }
    }

    /* Reveal on scroll */
    .reveal-item {
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
        will-change: opacity, transform;
    }

    /* Slideshows */
    .slideshow { position: relative; overflow: hidden; outline: none; }
    .slides { position: relative; min-height: inherit; }
    .slide {
        position: absolute;
        inset: 0;
        opacity: 0;
        transform: scale(1.04);
        transition: opacity 1s ease, transform 1s ease;
        pointer-events: none;
    }
    .slide.active { position: relative; opacity: 1; transform: scale(1); pointer-events: auto; }
    .slide.leaving { opacity: 0; transform: scale(0.98); }
    .slideshow-controls {
        display: flex;
        align-items: center;
        justify-content: center;
        gap: 16px;
        padding: 16px;
    }
    .slide-arrow { background: none; border: 1px solid currentColor; border-radius: 50%; width: 36px; height: 36px; cursor: pointer; }
    .slide-indicators { display: flex; gap: 8px; }
    .indicator { width: 10px; height: 10px; border-radius: 50%; border: none; background: rgba(20, 33, 43, 0.25); cursor: pointer; transition: transform 0.3s ease, background 0.3s ease; }
    .indicator.active { background: var(--sea); transform: scale(1.3); }
    .slide-count { font-variant-numeric: tabular-nums; color: var(--muted); }
    .slide-progress-track { position: absolute; left: 0; right: 0; bottom: 0; height: 3px; background: rgba(255, 255, 255, 0.2); }
    .slide-progress { height: 100%; width: 0; background: #fff; transition: width 50ms linear; }

    /* Pointer effects */
    .card-inner, .magnetic-target { transition: transform 0.2s ease-out; }
    .magnetic { display: inline-block; }

    /* Ripple */
    .ripple-button { position: relative; overflow: hidden; }
    .ripple {
        position: absolute;
        border-radius: 50%;
        background: rgba(255, 255, 255, 0.45);
        transform: scale(0);
        animation: ripple 0.6s linear;
        pointer-events: none;
    }
    @keyframes ripple { to { transform: scale(4); opacity: 0; } }

    /* Cards */
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(300px, 1fr));
        gap: 28px;
        max-width: 1200px;
        margin: 0 auto;
        padding: 24px;
    }
    .property-card { perspective: 1000px; }
    .card-inner { background: var(--card); border-radius: 16px; overflow: hidden; box-shadow: 0 10px 30px rgba(20, 33, 43, 0.08); }
    .card-image { position: relative; aspect-ratio: 4 / 3; overflow: hidden; }
    .card-image img { width: 100%; height: 100%; object-fit: cover; }
    .card-badge { position: absolute; top: 12px; left: 12px; padding: 4px 10px; border-radius: 999px; background: rgba(255, 255, 255, 0.9); font-size: 0.8rem; }
    .card-body { padding: 18px 20px 22px; }
    .card-body h3 { margin: 0 0 4px; }
    .card-location { margin: 0; color: var(--muted); }
    .card-price { margin: 10px 0; font-weight: 700; color: var(--sea); }
    .card-facts { display: flex; gap: 14px; padding: 0; margin: 0; list-style: none; color: var(--muted); font-size: 0.9rem; }

    .page-hero { padding: 140px 24px 40px; text-align: center; }

    /* Footer */
    .site-footer { margin-top: 80px; padding: 48px 24px 24px; background: var(--ink); color: #dfe6ea; }
    .footer-content { max-width: 1200px; margin: 0 auto; display: flex; flex-wrap: wrap; gap: 32px; justify-content: space-between; }
    .footer-logo { font-weight: 700; font-size: 1.3rem; }
    .footer-contact { display: flex; flex-direction: column; gap: 10px; }
    .copy-button { display: flex; gap: 12px; align-items: center; background: none; border: 1px solid rgba(255, 255, 255, 0.2); border-radius: 8px; color: inherit; padding: 8px 12px; cursor: pointer; }
    .copy-hint { font-size: 0.75rem; opacity: 0.6; }
    .footer-links { display: flex; gap: 18px; }
    .footer-links a { text-decoration: none; }
    .footer-legal { text-align: center; opacity: 0.6; font-size: 0.85rem; margin-top: 40px; }
"#;
