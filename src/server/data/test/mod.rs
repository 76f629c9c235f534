mod supabase;
mod system_config;
mod volante;
