pub const PAGE: &str = "min-h-screen w-full bg-stone-50 dark:bg-stone-950";
pub const CONTAINER: &str = "max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 py-8";
pub const NAV: &str = "fixed top-0 z-50 w-full bg-white/60 dark:bg-stone-800/60 backdrop-blur-md border-b border-stone-200/50 dark:border-stone-700/50";
pub const NAV_CONTENT: &str = "h-16 px-4 sm:px-6 lg:px-8 flex items-center justify-between";
pub const NAV_BRAND: &str = "text-xl font-bold text-stone-900 dark:text-white";
pub const NAV_LINK: &str = "relative px-3 py-2 text-sm font-medium text-stone-700 dark:text-stone-300 hover:text-amber-700 dark:hover:text-amber-400 transition-colors duration-200";
pub const CARD: &str = "bg-white dark:bg-stone-800 rounded-2xl shadow-xl dark:shadow-[0_8px_30px_-12px_rgba(255,255,255,0.1)] border border-stone-100 dark:border-stone-700 p-6 sm:p-8";
pub const BUTTON_PRIMARY: &str = "inline-flex items-center justify-center px-6 py-3 rounded-full font-bold text-white bg-gradient-to-r from-amber-600 to-amber-800 hover:from-amber-700 hover:to-amber-900 shadow-lg hover:shadow-xl transition-all duration-300 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center justify-center px-4 py-2 rounded-lg font-medium border border-stone-300 dark:border-stone-600 text-stone-900 dark:text-white hover:bg-stone-50 dark:hover:bg-stone-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const INPUT: &str = "block w-full rounded-lg border-0 bg-white dark:bg-stone-900 py-2 px-3 text-stone-900 dark:text-white shadow-sm ring-1 ring-inset ring-stone-300 dark:ring-stone-700";
pub const TEXT_H1: &str = "text-3xl font-bold text-stone-900 dark:text-white";
pub const TEXT_WINNER: &str = "text-2xl font-extrabold text-amber-700 dark:text-amber-400";
pub const TEXT_BODY: &str = "text-stone-600 dark:text-stone-300";
pub const TEXT_SMALL: &str = "text-sm text-stone-500 dark:text-stone-400";
pub const TEXT_LABEL: &str = "block text-sm font-medium text-stone-900 dark:text-white";
